//! Round seed from ADC noise on a floating input.
//!
//! One sample per round. `FIXED_SEED` in the config replaces sampling
//! with a constant, for boards without a free analog pin.

use embassy_nrf::saadc::Saadc;

use crate::config::FIXED_SEED;

pub struct AdcEntropy<'d> {
    saadc: Saadc<'d, 1>,
}

impl<'d> AdcEntropy<'d> {
    pub async fn new(saadc: Saadc<'d, 1>) -> Self {
        saadc.calibrate().await;
        Self { saadc }
    }

    /// Seed for the next round.
    pub async fn seed(&mut self) -> u16 {
        if let Some(seed) = FIXED_SEED {
            return seed;
        }
        let mut buf = [0i16; 1];
        self.saadc.sample(&mut buf).await;
        buf[0] as u16
    }
}
