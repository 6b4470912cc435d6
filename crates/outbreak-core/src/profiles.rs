//! Variant-specific unit profiles.
//!
//! Consolidates per-variant parameters so systems never branch on the
//! variant tag directly. New variants extend this table.

use crate::constants::*;
use crate::enums::{DeathEffect, ZombieVariant};

/// Static profile for a zombie variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZombieProfile {
    /// Pursuit speed (units per tick).
    pub speed: f64,
    /// Base hit points before wave scaling.
    pub hp: f64,
    /// Contact damage per tick before wave scaling.
    pub damage: f64,
    /// Collision radius.
    pub radius: f64,
    /// Score awarded on kill.
    pub score: u64,
    pub death_effect: DeathEffect,
    /// Body color hint.
    pub color: u32,
    /// Death burst color hint.
    pub burst_color: u32,
    /// Particles in the death burst.
    pub burst_count: usize,
    /// Whether the unit is clamped to world bounds after moving.
    pub clamped: bool,
}

/// Get the profile for a given variant.
pub fn get_profile(variant: ZombieVariant) -> ZombieProfile {
    match variant {
        ZombieVariant::Ordinary => ZombieProfile {
            speed: ORDINARY_SPEED,
            hp: ORDINARY_HP,
            damage: ORDINARY_DAMAGE,
            radius: ORDINARY_RADIUS,
            score: ORDINARY_SCORE,
            death_effect: DeathEffect::Burst,
            color: 0x6b8e23,
            burst_color: 0x8b0000,
            burst_count: DEATH_BURST_COUNT,
            clamped: false,
        },
        ZombieVariant::Fast => ZombieProfile {
            speed: FAST_SPEED,
            hp: FAST_HP,
            damage: FAST_DAMAGE,
            radius: FAST_RADIUS,
            score: FAST_SCORE,
            death_effect: DeathEffect::Burst,
            color: 0xcd5c5c,
            burst_color: 0xb22222,
            burst_count: DEATH_BURST_COUNT,
            clamped: false,
        },
        ZombieVariant::Heavy => ZombieProfile {
            speed: HEAVY_SPEED,
            hp: HEAVY_HP,
            damage: HEAVY_DAMAGE,
            radius: HEAVY_RADIUS,
            score: HEAVY_SCORE,
            death_effect: DeathEffect::Burst,
            color: 0x2f4f4f,
            burst_color: 0x556b2f,
            burst_count: DEATH_BURST_COUNT,
            clamped: false,
        },
        ZombieVariant::Boss => ZombieProfile {
            speed: BOSS_SPEED,
            hp: BOSS_HP,
            damage: BOSS_DAMAGE,
            radius: BOSS_RADIUS,
            score: BOSS_SCORE,
            death_effect: DeathEffect::Burst,
            color: 0x4b0082,
            burst_color: 0x9400d3,
            burst_count: BOSS_BURST_COUNT,
            clamped: true,
        },
        ZombieVariant::Volatile => ZombieProfile {
            speed: VOLATILE_SPEED,
            hp: VOLATILE_HP,
            damage: VOLATILE_DAMAGE,
            radius: VOLATILE_RADIUS,
            score: VOLATILE_SCORE,
            death_effect: DeathEffect::Explosion,
            color: 0xff4500,
            burst_color: 0xff8c00,
            burst_count: EXPLOSION_BURST_COUNT,
            clamped: false,
        },
        ZombieVariant::Corrosive => ZombieProfile {
            speed: CORROSIVE_SPEED,
            hp: CORROSIVE_HP,
            damage: CORROSIVE_DAMAGE,
            radius: CORROSIVE_RADIUS,
            score: CORROSIVE_SCORE,
            death_effect: DeathEffect::AcidPool,
            color: 0x9acd32,
            burst_color: 0x7fff00,
            burst_count: ACID_BURST_COUNT,
            clamped: false,
        },
    }
}

/// HP and contact-damage multiplier for a wave.
pub fn wave_multiplier(wave: u32) -> f64 {
    1.0 + WAVE_SCALING * wave as f64
}
