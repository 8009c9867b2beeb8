// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles.
//!
//! Every style resolves its colors through
//! [`scheme_for_theme`](crate::ui::theming::scheme_for_theme), so switching the
//! window theme restyles the whole form at once.

pub mod button;
pub mod container;
pub mod text_input;
