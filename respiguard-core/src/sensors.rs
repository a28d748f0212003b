//! Sensor Collaborator Seams
//!
//! The monitor talks to hardware through three narrow traits: a humidity
//! source, an analog gas proxy and a photoplethysmography front-end.
//! Register maps, bus addressing and driver setup all live behind these
//! seams; implementations are expected to do their own configuration
//! (LED currents, oversampling, address fallback) inside [`probe`].
//!
//! Probing happens once, when the monitor is built. A sensor that fails
//! its probe is marked absent for the life of the process and its
//! readings degrade to sentinels - the device keeps monitoring with
//! whatever is left.
//!
//! Scripted implementations are provided for host simulation and tests,
//! in the same spirit as [`crate::time::FixedClock`]: deterministic
//! stand-ins that replay a canned signal.
//!
//! [`probe`]: HumiditySensor::probe

use crate::errors::{SensorError, SensorResult};

/// Ambient relative-humidity source (BME280-class).
pub trait HumiditySensor {
    /// Detect and configure the device. Called once at monitor build.
    fn probe(&mut self) -> SensorResult<()> {
        Ok(())
    }

    /// Read relative humidity (%RH).
    fn read_humidity(&mut self) -> SensorResult<f32>;
}

/// Analog gas proxy (MQ-135-class) behind a platform ADC.
pub trait GasSensor {
    /// Read the raw ADC value; range is platform-defined.
    fn read_raw(&mut self) -> u16;
}

/// Photoplethysmography front-end (MAX3010x-class).
pub trait PulseSensor {
    /// Detect and configure the device. Called once at monitor build.
    fn probe(&mut self) -> SensorResult<()> {
        Ok(())
    }

    /// Current infrared channel magnitude.
    fn infrared(&mut self) -> u32;

    /// Current red channel magnitude.
    fn red(&mut self) -> u32;
}

/// Value at `idx`, holding the final value once the script runs out.
fn scripted<T: Copy + Default>(script: &[T], idx: usize) -> T {
    script
        .get(idx)
        .or_else(|| script.last())
        .copied()
        .unwrap_or_default()
}

/// Humidity source replaying a canned list of readings.
#[derive(Debug, Clone)]
pub struct ScriptedHumidity<'a> {
    values: &'a [f32],
    pos: usize,
    present: bool,
    fail_reads: bool,
}

impl<'a> ScriptedHumidity<'a> {
    /// Present sensor that replays `values`, holding the last one.
    pub const fn new(values: &'a [f32]) -> Self {
        Self {
            values,
            pos: 0,
            present: true,
            fail_reads: false,
        }
    }

    /// Sensor that fails its probe.
    pub const fn absent() -> Self {
        Self {
            values: &[],
            pos: 0,
            present: false,
            fail_reads: false,
        }
    }

    /// Sensor that probes fine but fails every read.
    pub const fn failing() -> Self {
        Self {
            values: &[],
            pos: 0,
            present: true,
            fail_reads: true,
        }
    }
}

impl HumiditySensor for ScriptedHumidity<'_> {
    fn probe(&mut self) -> SensorResult<()> {
        if self.present {
            Ok(())
        } else {
            Err(SensorError::NotDetected)
        }
    }

    fn read_humidity(&mut self) -> SensorResult<f32> {
        if self.fail_reads {
            return Err(SensorError::ReadFailed {
                reason: "scripted failure",
            });
        }
        let value = scripted(self.values, self.pos);
        self.pos += 1;
        Ok(value)
    }
}

/// Gas proxy replaying a canned list of raw ADC values.
#[derive(Debug, Clone)]
pub struct ScriptedGas<'a> {
    values: &'a [u16],
    pos: usize,
}

impl<'a> ScriptedGas<'a> {
    /// Replay `values`, holding the last one.
    pub const fn new(values: &'a [u16]) -> Self {
        Self { values, pos: 0 }
    }
}

impl GasSensor for ScriptedGas<'_> {
    fn read_raw(&mut self) -> u16 {
        let value = scripted(self.values, self.pos);
        self.pos += 1;
        value
    }
}

/// Pulse front-end replaying canned infrared and red channels.
///
/// [`PulseSensor::infrared`] advances the script one step per call;
/// [`PulseSensor::red`] returns the red value paired with the most
/// recent infrared sample. This matches the monitor's access pattern of
/// one infrared read per iteration with an occasional paired red read.
#[derive(Debug, Clone)]
pub struct ScriptedPulse<'a> {
    ir: &'a [u32],
    red: &'a [u32],
    cursor: usize,
    present: bool,
}

impl<'a> ScriptedPulse<'a> {
    /// Present sensor replaying the given channel scripts.
    pub const fn new(ir: &'a [u32], red: &'a [u32]) -> Self {
        Self {
            ir,
            red,
            cursor: 0,
            present: true,
        }
    }

    /// Sensor that fails its probe.
    pub const fn absent() -> Self {
        Self {
            ir: &[],
            red: &[],
            cursor: 0,
            present: false,
        }
    }
}

impl PulseSensor for ScriptedPulse<'_> {
    fn probe(&mut self) -> SensorResult<()> {
        if self.present {
            Ok(())
        } else {
            Err(SensorError::NotDetected)
        }
    }

    fn infrared(&mut self) -> u32 {
        let value = scripted(self.ir, self.cursor);
        self.cursor += 1;
        value
    }

    fn red(&mut self) -> u32 {
        scripted(self.red, self.cursor.saturating_sub(1))
    }
}
