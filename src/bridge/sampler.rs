//! Fixed-rate sample loop
//!
//! Each cycle reads whatever the board has sent, folds it into the running
//! [`Reading`], then moves and clicks the pointer from that reading. The
//! reading is owned by the loop and handed to every cycle, so a bad or empty
//! read simply replays the last known state.

use crate::bridge::channel::{BridgeError, BridgeResult};
use crate::config::BridgeConfig;
use crate::device::{parse_frame, Reading, Transport};
use crate::pointer::{apply_click, apply_motion, PointerBackend};
use crate::processing::{classify, detect_click, ClickAction, MotionIntent};
use std::time::{Duration, Instant};

/// What a single cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleReport {
    pub bytes_read: usize,
    pub fields_matched: usize,
    pub motion: MotionIntent,
    /// Requested displacement; the OS may clamp it at a screen edge
    pub delta: (i32, i32),
    pub click: ClickAction,
}

/// Connected bridge between a device transport and the pointer
pub struct Sampler<T, P> {
    transport: T,
    pointer: P,
    config: BridgeConfig,
    buf: Vec<u8>,
}

impl<T: Transport, P: PointerBackend> Sampler<T, P> {
    /// Take ownership of an opened transport.
    ///
    /// Fails if the config is invalid or the transport is not connected.
    /// There is no retry.
    pub fn connect(mut transport: T, pointer: P, config: BridgeConfig) -> BridgeResult<Self> {
        config.validate()?;

        if !transport.is_connected() {
            return Err(BridgeError::NotConnected(config.port.clone()));
        }

        tracing::info!(
            "Bridge connected on {} (interval={:?}, threshold=({}, {}), one_move={})",
            config.port,
            config.interval,
            config.threshold_x,
            config.threshold_y,
            config.one_move
        );

        let buf = vec![0; config.read_buffer_size];
        Ok(Self {
            transport,
            pointer,
            config,
            buf,
        })
    }

    /// Run one cycle: read, parse, classify, move, click.
    pub fn poll(&mut self, reading: &mut Reading) -> CycleReport {
        let bytes_read = self.transport.read(&mut self.buf);

        let fields_matched = if bytes_read == 0 {
            tracing::trace!("No data this cycle");
            0
        } else {
            let raw = &self.buf[..bytes_read];
            let matched = parse_frame(raw, reading);
            tracing::debug!(
                "Read {} bytes ({} fields): {:?} accel=({}, {}, {}) buttons=({}, {})",
                bytes_read,
                matched,
                String::from_utf8_lossy(raw),
                reading.accel.x,
                reading.accel.y,
                reading.accel.z,
                reading.left_button,
                reading.right_button
            );
            matched
        };

        let motion = classify(
            reading.accel.x,
            reading.accel.y,
            self.config.threshold_x,
            self.config.threshold_y,
        );
        let delta = apply_motion(&self.pointer, motion, self.config.one_move);

        let click = detect_click(reading.left_button, reading.right_button);
        apply_click(&self.pointer, click);

        CycleReport {
            bytes_read,
            fields_matched,
            motion,
            delta,
            click,
        }
    }

    /// Poll forever at the configured interval.
    ///
    /// A cycle that overruns the interval is followed immediately by the next.
    pub fn run(mut self) -> ! {
        let mut reading = Reading::default();
        let interval = self.config.interval;

        loop {
            let cycle_start = Instant::now();
            self.poll(&mut reading);

            if let Some(wait) = remaining(interval, cycle_start.elapsed()) {
                std::thread::sleep(wait);
            }
        }
    }

    /// Hand the transport and pointer back
    pub fn into_parts(self) -> (T, P) {
        (self.transport, self.pointer)
    }
}

/// Time left in the current cycle, or `None` if it used the whole interval
fn remaining(interval: Duration, elapsed: Duration) -> Option<Duration> {
    interval.checked_sub(elapsed).filter(|wait| !wait.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::serial::mock::MockTransport;
    use crate::device::Axes3;
    use crate::pointer::mock::MockPointer;
    use crate::pointer::{ButtonPhase, MouseButton};
    use crate::processing::AxisFlag;

    const FRAME: &[u8] = b"36.5\n100 -200 50\n6000 -6000 0\n0 1\n";
    const IDLE_FRAME: &[u8] = b"25.0\n0 0 0\n0 0 16384\n1 1\n";

    fn sampler(reads: &[&[u8]]) -> Sampler<MockTransport, MockPointer> {
        let mut transport = MockTransport::connected();
        for read in reads {
            transport.push(read);
        }
        Sampler::connect(transport, MockPointer::at(500, 500), BridgeConfig::default())
            .expect("mock transport is connected")
    }

    #[test]
    fn test_connect_requires_connection() {
        let result = Sampler::connect(
            MockTransport::default(),
            MockPointer::default(),
            BridgeConfig::default(),
        );
        assert!(matches!(result, Err(BridgeError::NotConnected(_))));
    }

    #[test]
    fn test_connect_rejects_invalid_config() {
        let config = BridgeConfig {
            one_move: 0,
            ..BridgeConfig::default()
        };
        let result = Sampler::connect(MockTransport::connected(), MockPointer::default(), config);
        assert!(matches!(result, Err(BridgeError::Configuration(_))));
    }

    #[test]
    fn test_end_to_end_frame() {
        let mut sampler = sampler(&[FRAME]);
        let mut reading = Reading::default();

        let report = sampler.poll(&mut reading);

        assert_eq!(report.bytes_read, FRAME.len());
        assert_eq!(report.fields_matched, 9);
        assert_eq!(
            report.motion,
            MotionIntent::new(AxisFlag::Positive, AxisFlag::Negative)
        );
        assert_eq!(report.delta, (-30, 30));
        assert_eq!(report.click, ClickAction::LeftClick);

        let (_, pointer) = sampler.into_parts();
        assert_eq!(pointer.position(), (470, 530));
        assert_eq!(
            pointer.events(),
            vec![
                (MouseButton::Left, ButtonPhase::Down, 470, 530),
                (MouseButton::Left, ButtonPhase::Up, 470, 530),
            ]
        );
    }

    #[test]
    fn test_click_fires_when_move_fails() {
        let mut sampler = sampler(&[FRAME]);
        sampler.pointer.fail_moves.set(true);
        let mut reading = Reading::default();

        let report = sampler.poll(&mut reading);
        assert_eq!(report.delta, (0, 0));
        assert_eq!(report.click, ClickAction::LeftClick);

        let (_, pointer) = sampler.into_parts();
        assert_eq!(pointer.position(), (500, 500));
        assert_eq!(
            pointer.events(),
            vec![
                (MouseButton::Left, ButtonPhase::Down, 500, 500),
                (MouseButton::Left, ButtonPhase::Up, 500, 500),
            ]
        );
    }

    #[test]
    fn test_remaining_sleeps_rest_of_interval() {
        let interval = Duration::from_millis(100);
        assert_eq!(
            remaining(interval, Duration::from_millis(3)),
            Some(Duration::from_millis(97))
        );
        assert_eq!(remaining(interval, Duration::ZERO), Some(interval));
    }

    #[test]
    fn test_remaining_exact_fit_does_not_sleep() {
        let interval = Duration::from_millis(100);
        assert_eq!(remaining(interval, interval), None);
    }

    #[test]
    fn test_remaining_overrun_starts_next_cycle_immediately() {
        let interval = Duration::from_millis(100);
        assert_eq!(remaining(interval, Duration::from_millis(250)), None);
    }

    #[test]
    fn test_empty_read_replays_last_reading() {
        let tilted: &[u8] = b"25.0\n0 0 0\n-9000 0 0\n1 1\n";
        let mut sampler = sampler(&[tilted]);
        let mut reading = Reading::default();

        sampler.poll(&mut reading);
        let before = reading;

        let report = sampler.poll(&mut reading);
        assert_eq!(report.bytes_read, 0);
        assert_eq!(report.fields_matched, 0);
        assert_eq!(reading, before);
        assert_eq!(report.delta, (30, 0), "stale accel still drives motion");

        let (_, pointer) = sampler.into_parts();
        assert_eq!(pointer.position(), (560, 500));
        assert!(pointer.events().is_empty());
    }

    #[test]
    fn test_partial_frame_keeps_stale_fields() {
        let garbled: &[u8] = b"40.0\n??";
        let mut sampler = sampler(&[FRAME, garbled]);
        let mut reading = Reading::default();

        sampler.poll(&mut reading);
        let report = sampler.poll(&mut reading);

        assert_eq!(report.fields_matched, 1);
        assert_eq!(reading.temperature, 40.0);
        assert_eq!(reading.gyro, Axes3::new(100, -200, 50));
        assert_eq!(reading.accel, Axes3::new(6000, -6000, 0));
        // Left button is still "pressed" from the previous frame
        assert_eq!(report.click, ClickAction::LeftClick);
    }

    #[test]
    fn test_held_button_clicks_every_cycle() {
        let held: &[u8] = b"25.0\n0 0 0\n0 0 0\n1 0\n";
        let mut sampler = sampler(&[held, held, held]);
        let mut reading = Reading::default();

        for _ in 0..3 {
            assert_eq!(sampler.poll(&mut reading).click, ClickAction::RightClick);
        }

        let (_, pointer) = sampler.into_parts();
        let downs = pointer
            .events()
            .iter()
            .filter(|(button, phase, _, _)| {
                *button == MouseButton::Right && *phase == ButtonPhase::Down
            })
            .count();
        assert_eq!(downs, 3);
        assert_eq!(pointer.events().len(), 6);
    }

    #[test]
    fn test_idle_frame_does_nothing() {
        let mut sampler = sampler(&[IDLE_FRAME]);
        let mut reading = Reading::default();

        let report = sampler.poll(&mut reading);
        assert!(report.motion.is_idle());
        assert_eq!(report.click, ClickAction::None);

        let (_, pointer) = sampler.into_parts();
        assert_eq!(pointer.position(), (500, 500));
        assert!(pointer.events().is_empty());
    }

    #[test]
    fn test_no_click_before_first_frame() {
        let mut sampler = sampler(&[]);
        let mut reading = Reading::default();

        let report = sampler.poll(&mut reading);
        assert_eq!(report, CycleReport::default());
    }

    #[test]
    fn test_read_is_bounded_by_buffer() {
        let mut transport = MockTransport::connected();
        transport.push(FRAME);
        let config = BridgeConfig {
            read_buffer_size: 8,
            ..BridgeConfig::default()
        };
        let mut sampler = Sampler::connect(transport, MockPointer::at(0, 0), config).unwrap();
        let mut reading = Reading::default();

        let report = sampler.poll(&mut reading);
        assert_eq!(report.bytes_read, 8);
        // "36.5\n100" -> temperature and gyro_x
        assert_eq!(report.fields_matched, 2);
        assert_eq!(reading.gyro.x, 100);
    }

    #[test]
    fn test_into_parts_returns_transport() {
        let sampler = sampler(&[FRAME]);
        let (mut transport, _) = sampler.into_parts();
        assert_eq!(transport.reads.len(), 1);
        transport.close();
        assert!(!transport.is_connected());
    }
}
