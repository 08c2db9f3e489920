//! Shared test utilities for the context-launch workspace.
//!
//! This crate provides scripted collaborators and fixtures so resolver and
//! CLI tests do not each grow their own. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`fakes`] - scripted and recording collaborator implementations
//! - [`tree`] - resource and configuration constructors
//! - [`workspace`] - [`workspace::TestWorkspace`] for on-disk `.launch/` setups

pub mod fakes;
pub mod tree;
pub mod workspace;
