// ABOUTME: Re-exports command modules for progress-cli
// ABOUTME: Provides access to the analytics commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analytics;
