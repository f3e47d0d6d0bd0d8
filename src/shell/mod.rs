// Composition root for the fitness tracker.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Expose the HTTP router and GraphQL schema for the binary and for tests.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
