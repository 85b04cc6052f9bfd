//! # Rendered Config Splitter (`fabric::splitter`)
//!
//! File: cli/src/fabric/splitter.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The controller renders a switch configuration as one text blob. Configlets
//! layered on top of the intended configuration are appended after marker
//! lines. This module cuts the blob at those markers:
//!
//! ```text
//! <intended>
//! ------BEGIN SECTION CONFIGLETS------
//! <configlet>
//! ------BEGIN SECTION SET AND DELETE BASED CONFIGLETS------
//! <configlet set>
//! ```
//!
//! Only the first occurrence of each marker counts, the set marker is only
//! looked for after the configlet marker, and markers are dropped from the
//! output. A marker string that happens to appear inside configuration
//! payload is still treated as a divider.
//!

/// Marks the start of the configlet section.
pub const CONFIGLETS_MARKER: &str = "------BEGIN SECTION CONFIGLETS------";
/// Marks the start of the set/delete based configlet section.
pub const SET_CONFIGLETS_MARKER: &str = "------BEGIN SECTION SET AND DELETE BASED CONFIGLETS------";

/// The sections of one rendered configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSections<'a> {
    pub intended: &'a str,
    pub configlet: Option<&'a str>,
    pub configlet_set: Option<&'a str>,
}

/// Splits `rendered` into intended, configlet and set-configlet sections.
pub fn split_rendered(rendered: &str) -> ConfigSections<'_> {
    let Some((intended, rest)) = rendered.split_once(CONFIGLETS_MARKER) else {
        return ConfigSections {
            intended: rendered,
            configlet: None,
            configlet_set: None,
        };
    };
    match rest.split_once(SET_CONFIGLETS_MARKER) {
        Some((configlet, configlet_set)) => ConfigSections {
            intended,
            configlet: Some(configlet),
            configlet_set: Some(configlet_set),
        },
        None => ConfigSections {
            intended,
            configlet: Some(rest),
            configlet_set: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_markers() {
        let text = "system {\n  host-name leaf1;\n}\n";
        let sections = split_rendered(text);
        assert_eq!(sections.intended, text);
        assert_eq!(sections.configlet, None);
        assert_eq!(sections.configlet_set, None);
    }

    #[test]
    fn test_only_configlet_marker() {
        let text = format!("base\n{}\nsnmp\n", CONFIGLETS_MARKER);
        let sections = split_rendered(&text);
        assert_eq!(sections.intended, "base\n");
        assert_eq!(sections.configlet, Some("\nsnmp\n"));
        assert_eq!(sections.configlet_set, None);
    }

    #[test]
    fn test_both_markers() {
        let text = "A\n------BEGIN SECTION CONFIGLETS------\nB\n------BEGIN SECTION SET AND DELETE BASED CONFIGLETS------\nC";
        let sections = split_rendered(text);
        assert_eq!(sections.intended, "A\n");
        assert_eq!(sections.configlet, Some("\nB\n"));
        assert_eq!(sections.configlet_set, Some("\nC"));
    }

    #[test]
    fn test_both_markers_reassemble_exactly() {
        let text = format!(
            "interfaces {{}}\n{}\nset a\n{}\ndelete b\n",
            CONFIGLETS_MARKER, SET_CONFIGLETS_MARKER
        );
        let s = split_rendered(&text);
        let rebuilt = format!(
            "{}{}{}{}{}",
            s.intended,
            CONFIGLETS_MARKER,
            s.configlet.unwrap(),
            SET_CONFIGLETS_MARKER,
            s.configlet_set.unwrap()
        );
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_set_marker_without_configlet_marker_stays_intended() {
        let text = format!("base\n{}\nset x\n", SET_CONFIGLETS_MARKER);
        let sections = split_rendered(&text);
        assert_eq!(sections.intended, text);
        assert_eq!(sections.configlet, None);
    }

    #[test]
    fn test_repeated_marker_splits_on_first() {
        let text = format!("a{m}b{m}c", m = CONFIGLETS_MARKER);
        let sections = split_rendered(&text);
        assert_eq!(sections.intended, "a");
        assert_eq!(sections.configlet, Some(format!("b{}c", CONFIGLETS_MARKER).as_str()));
    }

    #[test]
    fn test_case_sensitive() {
        let text = "x\n------begin section configlets------\ny";
        assert_eq!(split_rendered(text).configlet, None);
    }
}
