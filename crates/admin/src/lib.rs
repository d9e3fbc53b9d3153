//! Backline Admin - the admin panel SPA engine.
//!
//! The admin panel is a single-page application: one content region, a hash
//! route per view, and a router that sequences every view through the same
//! lifecycle (render placeholder, load data, bind events, highlight nav).
//! This crate is that application with the browser factored out: markup is
//! rendered to strings through askama, the content region is an explicit
//! value, and all data flows through the REST API via [`client::ApiClient`].
//!
//! # Modules
//!
//! - [`session`] - explicit session context (token + logged-in user)
//! - [`client`] - the resource client wrapping HTTP with uniform errors
//! - [`services`] - flat CRUD functions, one per REST verb-path pair
//! - [`route`] - the closed route table and hash parsing
//! - [`view`] - the lifecycle contract every view implements
//! - [`region`] - the content region views render into
//! - [`views`] - the view implementations and their dispatch table
//! - [`app`] - the router: navigation, actions, form submission

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod client;
pub mod notify;
pub mod region;
pub mod route;
pub mod services;
pub mod session;
pub mod view;
pub mod views;

pub use app::{AdminApp, LoadOutcome, Navigation, NavigationTicket, UiAction};
pub use client::{ApiClient, ApiClientError};
pub use notify::{Level, Notification};
pub use region::{ContentRegion, ViewPhase};
pub use route::Route;
pub use session::{Session, SessionStore};
pub use view::{EventBinding, FormData, FormFile, Slot, SubmitOutcome, View};
