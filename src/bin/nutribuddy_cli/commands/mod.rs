// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for nutribuddy-cli
// ABOUTME: Provides access to profile, food, water, recipe, chat, and summary commands

pub mod chat;
pub mod food;
pub mod profile;
pub mod recipes;
pub mod summary;
pub mod water;
