pub mod accounts;
pub mod activate;
pub mod agreement;
pub mod app;
pub mod bill_form;
pub mod effect;
pub mod events;
pub mod footer;
pub mod forgot;
pub mod form;
pub mod header;
pub mod home;
pub mod input;
pub mod layout;
pub mod login;
pub mod mvi;
pub mod nav;
pub mod paytypes;
pub mod profile;
pub mod register;
pub mod render;
pub mod runtime;
pub mod settings;
pub mod terminal_guard;
pub mod theme;
pub mod widgets;
pub mod worker;
