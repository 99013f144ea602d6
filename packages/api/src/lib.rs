//! # API crate: REST client for the diary backend
//!
//! Every screen talks to the server through [`DiaryClient`]. The client owns the
//! [`store::Session`] so it can attach the bearer token to each request and drop
//! it again when the server answers 401.
//!
//! | Method | Path | Client method |
//! |--------|------|---------------|
//! | GET | `/entries` | [`DiaryClient::list_entries`] |
//! | GET | `/entries/{id}` | [`DiaryClient::get_entry`] |
//! | POST | `/entries` | [`DiaryClient::create_entry`] |
//! | DELETE | `/entries/{id}` | [`DiaryClient::delete_entry`] |
//! | POST | `/entries/{id}/unlock` | [`DiaryClient::unlock_entry`] |
//! | POST | `/entries/{id}/respond` | [`DiaryClient::respond`] |
//! | GET | `/summary` | [`DiaryClient::summary`] |
//! | GET | `/ai/questions` | [`DiaryClient::ai_questions`] |
//! | GET | `/ai/alerts` | [`DiaryClient::ai_alerts`] |
//! | POST | `/preferences` | [`DiaryClient::answer_question`] |
//! | GET | `/profile` | [`DiaryClient::profile`] |
//! | POST | `/profile` | [`DiaryClient::update_profile`] |
//! | POST | `/login` | [`DiaryClient::login`] |
//! | POST | `/register` | [`DiaryClient::register`] |
//!
//! `/login` and `/register` are sent without a token, and a 401 from them is an
//! ordinary [`ApiError::Rejected`] rather than a session reset.

mod client;
mod error;

pub use client::{resolve_base_url, DiaryClient};
pub use error::ApiError;
pub use reqwest::{Method, StatusCode};
