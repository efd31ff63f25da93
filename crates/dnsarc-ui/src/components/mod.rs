pub mod confirm_dialog;
pub mod create_zone_dialog;
pub mod dialog;
pub mod field;
pub mod nav;
pub mod record_dialogs;
pub mod toast;
