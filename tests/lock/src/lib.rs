//! Shared fixtures for the gripper lock tests.

#![forbid(unsafe_code)]

pub mod fixtures;
