// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests import modules from this crate root to reach the code under test.

pub mod shared {
    pub mod core {
        pub mod math;
    }
}

pub mod modules {
    pub mod profiles {
        pub mod core {
            pub mod ports;
            pub mod profile;
        }
        pub mod use_cases {
            pub mod save_profile {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_profile {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_dashboard {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod profiles_in_memory;
            }
        }
    }

    pub mod plans {
        pub mod core {
            pub mod plan;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod get_diet_plan {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_workout_plan {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod plans_in_memory;
            }
        }
    }

    pub mod workouts {
        pub mod core {
            pub mod log_entry;
            pub mod performance;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod log_workout {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_workout_logs {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_performance {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod workout_logs_in_memory;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod test_support {
    pub mod fixtures {
        pub mod commands {
            pub mod log_workout;
            pub mod save_profile;
        }
        pub mod entries;
    }
}
