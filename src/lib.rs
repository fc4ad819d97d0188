// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Larissa — deterministic milestone layout for roadmap Gantt views.
//!
//! The core is a pure pipeline in [`layout`]: project rows in, laid-out rows
//! (bar geometry, month blocks, label lines, row heights) out. [`feed`]
//! ingests the backend's JSON export, [`render`] draws laid-out rows as
//! Unicode text.

pub mod feed;
pub mod layout;
pub mod model;
pub mod render;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
