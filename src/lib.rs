pub mod component_context;
pub mod components;
pub mod constants;
pub mod content;
pub mod desktop;
pub mod dock;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod keybindings;
pub mod layout;
pub mod log_buffer;
pub mod panel;
pub mod photos;
pub mod runner;
pub mod state;
pub mod term_color;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;
