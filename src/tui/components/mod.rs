//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TopBar`: menu icon and screen title
//! - `BottomBar`: Home/Profile tabs
//! - `HomeScreen`, `ProfileScreen`, `SettingsScreen`: one per route
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that own local state and emit events:
//! - `InputBox`: single-line text field (item entry, search)
//! - `DrawerState`/`Drawer`: modal side menu
//! - `FadeIn`: screen transition timer
//!
//! Components receive external data as props, never by reaching into `App`
//! themselves, so each one can be rendered against a `TestBackend` in
//! isolation.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── top_bar.rs
//! ├── bottom_bar.rs
//! ├── drawer.rs
//! ├── fade.rs
//! ├── home.rs
//! ├── profile.rs
//! ├── settings.rs
//! └── input_box/
//! ```

pub mod bottom_bar;
pub mod drawer;
pub mod fade;
pub mod home;
pub mod input_box;
pub mod profile;
pub mod settings;
pub mod top_bar;

pub use bottom_bar::BottomBar;
pub use drawer::{Drawer, DrawerEvent, DrawerState};
pub use fade::FadeIn;
pub use home::HomeScreen;
pub use input_box::{InputBox, InputEvent};
pub use profile::ProfileScreen;
pub use settings::SettingsScreen;
pub use top_bar::TopBar;
