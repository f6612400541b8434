pub mod stop_signal;
pub mod update_callback;
