//! Terminal renderer: one character per cell
//!
//! `.` alive, `*` burning, `#` burnt

use std::io::{self, Write};
use wildfire_rd_core::simulation::{BurnTracker, CellState, Renderer};
use wildfire_rd_core::Grid;

pub struct TextRenderer<W: Write> {
    out: W,
    tracker: Option<BurnTracker>,
    frame_interval: u64,
    frames_seen: u64,
    write_error: Option<io::Error>,
}

impl TextRenderer<io::Stdout> {
    pub fn stdout(frame_interval: u64) -> Self {
        Self::new(io::stdout(), frame_interval)
    }
}

impl<W: Write> TextRenderer<W> {
    /// `frame_interval` of 0 tracks state but never prints
    pub fn new(out: W, frame_interval: u64) -> Self {
        Self {
            out,
            tracker: None,
            frame_interval,
            frames_seen: 0,
            write_error: None,
        }
    }

    /// Seed the has-burnt history with the starting grid and draw it
    pub fn start(&mut self, temperature: &Grid, fuel: &Grid, ignition_temperature: f64) {
        let tracker = BurnTracker::new(temperature, ignition_temperature);
        if self.frame_interval > 0 {
            self.draw(&tracker, temperature, fuel, 0);
        }
        self.tracker = Some(tracker);
    }

    /// First write error since the last call, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.write_error.take()
    }

    fn draw(&mut self, tracker: &BurnTracker, temperature: &Grid, fuel: &Grid, frame: u64) {
        let size = temperature.size();
        let mut text = format!("--- frame {frame} ---\n");
        for (idx, state) in tracker.states(temperature, fuel).into_iter().enumerate() {
            text.push(match state {
                CellState::Alive => '.',
                CellState::Burning => '*',
                CellState::Burnt => '#',
            });
            if (idx + 1) % size == 0 {
                text.push('\n');
            }
        }
        if self.write_error.is_some() {
            return;
        }
        if let Err(err) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
        {
            self.write_error = Some(err);
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, temperature: &Grid, fuel: &Grid, ignition_temperature: f64) {
        let mut tracker = self
            .tracker
            .take()
            .unwrap_or_else(|| BurnTracker::new(temperature, ignition_temperature));
        tracker.update(temperature);
        self.frames_seen += 1;

        if self.frame_interval > 0 && self.frames_seen % self.frame_interval == 0 {
            self.draw(&tracker, temperature, fuel, self.frames_seen);
        }
        self.tracker = Some(tracker);
    }
}
