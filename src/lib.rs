/**
 * Practice the U.S. naturalization civics test from the command line.
 *
 * Author:  Ian Fisher (iafisher@fastmail.com)
 * Version: August 2026
 */
#[macro_use]
pub mod iohelper;

pub mod choices;
pub mod classify;
pub mod common;
pub mod coverage;
pub mod curated;
pub mod dataset;
pub mod matching;
pub mod persistence;
pub mod quiz;
pub mod scheduler;
pub mod ui;
