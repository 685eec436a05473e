// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{session, welcome};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Welcome(welcome::Message),
    Session(session::Message),
    ToggleTheme,
    ToggleMute,
}

/// Runtime flags passed in from the command line.
///
/// Directory overrides are not carried here: `main` registers them with
/// [`paths::init_cli_overrides`](super::paths::init_cli_overrides) before
/// the app boots.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g., `en-US`, `fr`).
    pub lang: Option<String>,
}
