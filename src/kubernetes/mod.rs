// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, kind resolution and dynamic resource access.

pub mod client;
pub mod mapper;
pub mod resources;

pub use client::create_client;
pub use mapper::RestMapper;
pub use resources::ResourceClient;
