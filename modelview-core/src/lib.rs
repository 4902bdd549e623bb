pub mod error;

pub mod config;

pub mod logging;
pub use logging::Logger;

pub mod store {
    pub mod catalog;
    pub use catalog::ModelStore;

    pub mod record;
    pub use record::ModelRecord;
}

pub mod model {
    pub mod app_state;

    pub mod catalog_state;
    pub use catalog_state::{CatalogState, SortKey};

    pub mod ui_state;
    pub use ui_state::{FilterField, Focus, Notification, NotificationLevel, UIState};
}

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod event_loop;
    pub use event_loop::Controller;
}

pub mod view {
    pub mod theme;

    pub mod ui;

    pub mod components {
        pub mod filter_bar;
        pub use filter_bar::FilterBar;
        pub mod record_table;
        pub use record_table::RecordTable;
        pub mod status_bar;
        pub use status_bar::StatusBar;
    }

    pub use components::*;
}

pub mod symlinks;

pub use error::AppError;

pub use model::{app_state::AppState, catalog_state::CatalogState, ui_state::UIState};
pub use store::{catalog::ModelStore, record::ModelRecord};
