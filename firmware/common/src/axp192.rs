//! AXP192 power-management IC driver.
//!
//! The handheld uses the AXP192 for three things the UI cares about: the
//! VBUS (USB) voltage, the battery cell voltage, and the LCD backlight,
//! which is powered from LDO2.
//!
//! Reference: X-Powers AXP192 datasheet (register map §9).

use embedded_hal::i2c::I2c;

use crate::hal::{Brightness, PowerSupply};

/// 7-bit I2C device address.
pub const AXP192_I2C_ADDR: u8 = 0x34;
/// REG28: LDO2 (bits 7:4) and LDO3 (bits 3:0) output voltage.
pub const REG28_LDO2_LDO3_VOLTAGE: u8 = 0x28;
/// REG5A/5B: VBUS voltage ADC, high 8 bits then low 4 bits.
pub const REG5A_VBUS_VOLTAGE: u8 = 0x5A;
/// REG78/79: battery voltage ADC, high 8 bits then low 4 bits.
pub const REG78_BATTERY_VOLTAGE: u8 = 0x78;

/// VBUS ADC resolution.
pub const VBUS_MV_PER_LSB: f32 = 1.7;
/// Battery ADC resolution.
pub const BATTERY_MV_PER_LSB: f32 = 1.1;

/// LDO2 voltage at 0% backlight.
pub const BACKLIGHT_MIN_MV: u32 = 2500;
/// LDO2 voltage at 100% backlight.
pub const BACKLIGHT_MAX_MV: u32 = 3200;

const LDO_BASE_MV: u32 = 1800;
const LDO_STEP_MV: u32 = 100;
const LDO3_MASK: u8 = 0x0F;

/// Combine the two ADC registers into the 12-bit sample.
#[inline]
pub const fn decode_adc12(raw: [u8; 2]) -> u16 { ((raw[0] as u16) << 4) | (raw[1] & 0x0F) as u16 }

/// LDO2 register step (upper nibble of REG28) for a backlight level.
///
/// The percentage maps linearly onto `BACKLIGHT_MIN_MV..=BACKLIGHT_MAX_MV`;
/// LDO2 is programmed in 100 mV steps above 1.8 V.
pub const fn backlight_ldo2_step(level: Brightness) -> u8 {
    let millivolts = BACKLIGHT_MIN_MV + (level.percent() as u32 * (BACKLIGHT_MAX_MV - BACKLIGHT_MIN_MV)) / 100;
    ((millivolts - LDO_BASE_MV) / LDO_STEP_MV) as u8
}

/// AXP192 on an `embedded-hal` I2C bus.
pub struct Axp192<I> {
    i2c: I,
    address: u8,
}

impl<I: I2c> Axp192<I> {
    /// Driver at the default address.
    pub const fn new(i2c: I) -> Self {
        Self {
            i2c,
            address: AXP192_I2C_ADDR,
        }
    }

    /// Give the bus back.
    pub fn release(self) -> I { self.i2c }

    fn read_register(
        &mut self,
        register: u8,
    ) -> Result<u8, I::Error> {
        let mut value = [0u8];
        self.i2c.write_read(self.address, &[register], &mut value)?;
        Ok(value[0])
    }

    fn write_register(
        &mut self,
        register: u8,
        value: u8,
    ) -> Result<(), I::Error> {
        self.i2c.write(self.address, &[register, value])
    }

    fn read_adc12(
        &mut self,
        register: u8,
    ) -> Result<u16, I::Error> {
        let mut raw = [0u8; 2];
        self.i2c.write_read(self.address, &[register], &mut raw)?;
        Ok(decode_adc12(raw))
    }
}

impl<I: I2c> PowerSupply for Axp192<I> {
    type Error = I::Error;

    fn vbus_voltage(&mut self) -> Result<f32, Self::Error> {
        let raw = self.read_adc12(REG5A_VBUS_VOLTAGE)?;
        Ok(f32::from(raw) * VBUS_MV_PER_LSB / 1000.0)
    }

    fn battery_voltage(&mut self) -> Result<f32, Self::Error> {
        let raw = self.read_adc12(REG78_BATTERY_VOLTAGE)?;
        Ok(f32::from(raw) * BATTERY_MV_PER_LSB / 1000.0)
    }

    fn set_backlight(
        &mut self,
        level: Brightness,
    ) -> Result<(), Self::Error> {
        // LDO3 shares the register and must keep its setting.
        let current = self.read_register(REG28_LDO2_LDO3_VOLTAGE)?;
        let value = (current & LDO3_MASK) | (backlight_ldo2_step(level) << 4);
        self.write_register(REG28_LDO2_LDO3_VOLTAGE, value)
    }
}
