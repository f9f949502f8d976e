//! The [`Picker`] controller owns the current color, the history and the
//! eye-dropper busy flag. Every input is reduced to an RGB triple and passed
//! through [`normalize`](crate::normalize); listeners are told what changed.

use bitflags::bitflags;
use rand::Rng;

use crate::{
    color::{Color, Format},
    config::Config,
    error::PickerError,
    eyedropper::{EyeDropper, Pick},
    hex::parse_hex_strict,
    history::History,
    math::Point,
    models::{Channel, HslComponent, Rgb},
    spectrum::Spectrum,
};

bitflags! {
    /// The parts of a [`Picker`] changed by an operation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Changes : u8 {
        /// The current color changed.
        const COLOR = 1 << 0;
        /// The history changed.
        const HISTORY = 1 << 1;
        /// The eye-dropper busy flag changed.
        const PICKING = 1 << 2;
    }
}

/// Identifies a listener registered with [`Picker::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Changes, &Picker)>;

/// Owns the picker state and applies user input to it.
pub struct Picker {
    color: Color,
    history: History,
    picking: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Picker {
    /// Create a picker with the default color and history.
    pub fn new() -> Self {
        Self::from_parts(Color::default(), History::default())
    }

    /// Create a picker from a config. Colors are read leniently, see
    /// [`Config::validate`] for strict checking.
    pub fn with_config(config: &Config) -> Self {
        let seed: Vec<String> = config
            .history
            .iter()
            .map(|c| Color::from_hex(c).hex().to_owned())
            .collect();

        Self::from_parts(
            Color::from_hex(&config.initial),
            History::seeded(&seed, config.history_capacity),
        )
    }

    fn from_parts(color: Color, history: History) -> Self {
        Self {
            color,
            history,
            picking: false,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// The current color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// The color history, most recent first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether an eye-dropper acquisition is in progress.
    pub fn is_picking(&self) -> bool {
        self.picking
    }

    /// Render the current color for the clipboard.
    pub fn copy(&self, format: Format) -> String {
        self.color.format(format)
    }

    /// Set the color from raw RGB values; out-of-range values are clamped.
    pub fn set_rgb(&mut self, red: i32, green: i32, blue: i32) -> &Color {
        self.update(Rgb::clamped(red, green, blue), false)
    }

    /// Set a single RGB channel, keeping the other two.
    pub fn set_channel(&mut self, channel: Channel, value: i32) -> &Color {
        let rgb = self.color.rgb().with_channel(channel, value);
        self.update(rgb, false)
    }

    /// Set the color from the HSL notation.
    pub fn set_hsl(&mut self, hue: i32, saturation: i32, lightness: i32) -> &Color {
        self.update(crate::hsl_to_rgb(hue, saturation, lightness), false)
    }

    /// Set a single HSL component, keeping the other two as currently shown.
    pub fn set_hsl_component(&mut self, component: HslComponent, value: i32) -> &Color {
        let (h, s, l) = self.color.hsl().with_component(component, value);
        self.set_hsl(h, s, l)
    }

    /// Set the color from hex text typed by the user. Only `#` followed by 6
    /// hex digits is accepted; anything else is ignored and `false` returned.
    /// An accepted color is added to the history.
    pub fn set_hex(&mut self, text: &str) -> bool {
        match parse_hex_strict(text) {
            Ok(rgb) => {
                self.update(rgb, true);
                true
            }
            Err(err) => {
                log::debug!("ignoring hex input {text:?}: {err}");
                false
            }
        }
    }

    /// Select the history entry at `index`. The history order is left as is.
    pub fn select_history(&mut self, index: usize) -> Option<&Color> {
        let rgb = crate::hex_to_rgb(self.history.get(index)?);
        Some(self.update(rgb, false))
    }

    /// Set the color to the one drawn at `point` on the spectrum canvas.
    pub fn sample(&mut self, spectrum: &Spectrum, point: Point) -> &Color {
        self.update(spectrum.sample(point), false)
    }

    /// Set a uniformly random color and add it to the history.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Color {
        let rgb = Rgb::new(rng.gen(), rng.gen(), rng.gen());
        self.update(rgb, true)
    }

    /// Add the current color to the front of the history.
    pub fn add_to_history(&mut self) {
        let changes = self.remember();
        self.notify(changes);
    }

    /// Mark an eye-dropper acquisition as started. Fails if one is already in
    /// progress.
    pub fn begin_pick(&mut self) -> Result<(), PickerError> {
        if self.picking {
            return Err(PickerError::Busy);
        }

        log::debug!("eye-dropper pick started");
        self.picking = true;
        self.notify(Changes::PICKING);
        Ok(())
    }

    /// Finish the acquisition started with [`Picker::begin_pick`]. A picked
    /// color is applied and added to the history; cancellation changes
    /// nothing. Returns the new color if one was picked.
    pub fn finish_pick(&mut self, pick: Pick) -> Option<&Color> {
        if !self.picking {
            log::warn!("eye-dropper result {pick:?} arrived with no pick in progress");
            return None;
        }
        self.picking = false;

        let mut changes = Changes::PICKING;
        let picked = match pick {
            Pick::Picked(hex) => {
                log::debug!("eye-dropper picked {hex}");
                changes |= self.replace(Color::from_hex(&hex));
                changes |= self.remember();
                true
            }
            Pick::Cancelled => {
                log::debug!("eye-dropper pick cancelled");
                false
            }
            Pick::Unavailable => {
                log::debug!("eye-dropper unavailable");
                false
            }
        };

        self.notify(changes);
        picked.then_some(&self.color)
    }

    /// Run a full acquisition with `dropper`. If the host has no eye-dropper,
    /// `Pick::Unavailable` is returned without starting one.
    pub fn pick_with<D: EyeDropper + ?Sized>(&mut self, dropper: &mut D) -> Result<Pick, PickerError> {
        if !dropper.is_available() {
            log::debug!("eye-dropper unavailable");
            return Ok(Pick::Unavailable);
        }

        self.begin_pick()?;
        let pick = dropper.open();
        self.finish_pick(pick.clone());
        Ok(pick)
    }

    /// Register a listener called after every operation that changed the
    /// state.
    pub fn subscribe(&mut self, listener: impl FnMut(Changes, &Picker) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(i, _)| *i != id);
        self.listeners.len() != before
    }

    fn update(&mut self, rgb: Rgb, remember: bool) -> &Color {
        let mut changes = self.replace(Color::from_rgb(rgb));
        if remember {
            changes |= self.remember();
        }
        self.notify(changes);
        &self.color
    }

    fn replace(&mut self, color: Color) -> Changes {
        if color == self.color {
            return Changes::empty();
        }
        log::trace!("color {} -> {}", self.color, color);
        self.color = color;
        Changes::COLOR
    }

    fn remember(&mut self) -> Changes {
        if self.history.push(self.color.hex()) {
            log::trace!("history now starts with {}", self.color);
            Changes::HISTORY
        } else {
            Changes::empty()
        }
    }

    fn notify(&mut self, changes: Changes) {
        if changes.is_empty() {
            return;
        }

        let mut listeners = std::mem::take(&mut self.listeners);
        for (_, listener) in listeners.iter_mut() {
            listener(changes, self);
        }
        self.listeners = listeners;
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Picker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Picker")
            .field("color", &self.color)
            .field("history", &self.history)
            .field("picking", &self.picking)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{assert_consistent, eyedropper::Unsupported, history, models::Hsl};

    fn record(picker: &mut Picker) -> Rc<RefCell<Vec<Changes>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        picker.subscribe(move |changes, _| sink.borrow_mut().push(changes));
        log
    }

    #[test]
    fn starts_with_defaults() {
        let picker = Picker::new();
        assert_eq!(picker.color().hex(), "#3b82f6");
        assert_eq!(picker.history().entries(), history::SEED);
        assert!(!picker.is_picking());
    }

    #[test]
    fn rgb_input_is_clamped() {
        let mut picker = Picker::new();
        assert_eq!(picker.set_rgb(300, -5, 16).hex(), "#ff0010");
        assert_eq!(picker.set_channel(Channel::Green, 1000).rgb(), Rgb::new(255, 255, 16));
        assert_consistent!(picker.color());
    }

    #[test]
    fn hsl_sliders() {
        let mut picker = Picker::new();
        picker.set_hsl(0, 100, 50);
        assert_eq!(picker.color().rgb(), Rgb::new(255, 0, 0));

        picker.set_hsl_component(HslComponent::Hue, 120);
        assert_eq!(picker.color().rgb(), Rgb::new(0, 255, 0));
        assert_eq!(picker.color().hsl(), Hsl::new(120, 100, 50));

        picker.set_hsl_component(HslComponent::Lightness, 100);
        assert_eq!(picker.color().rgb(), Rgb::WHITE);
        assert_consistent!(picker.color());
    }

    #[test]
    fn hex_input_is_strict() {
        let mut picker = Picker::new();
        let history = picker.history().clone();

        for input in ["3b82f6", "#3b82f", "#3b82f6ff", "#zzzzzz", ""] {
            assert!(!picker.set_hex(input));
        }
        assert_eq!(picker.color().hex(), "#3b82f6");
        assert_eq!(picker.history(), &history);

        assert!(picker.set_hex("#FF8800"));
        assert_eq!(picker.color().hex(), "#ff8800");
        assert_eq!(picker.history().get(0), Some("#ff8800"));
    }

    #[test]
    fn selecting_history_keeps_order() {
        let mut picker = Picker::new();
        assert_eq!(picker.select_history(2).map(Color::hex), Some("#10b981"));
        assert_eq!(picker.history().entries(), history::SEED);
        assert!(picker.select_history(42).is_none());
        assert_eq!(picker.color().hex(), "#10b981");
    }

    #[test]
    fn sample_spectrum() {
        let mut picker = Picker::new();
        let spectrum = Spectrum::default();
        assert_eq!(picker.sample(&spectrum, Point::new(300, 225)).rgb(), Rgb::new(64, 0, 127));
        assert_consistent!(picker.color());
    }

    #[test]
    fn random_colors_are_remembered() {
        let mut picker = Picker::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let hex = picker.randomize(&mut rng).hex().to_owned();
            assert_eq!(picker.history().get(0), Some(hex.as_str()));
            assert!(picker.history().len() <= history::CAPACITY);
            assert_consistent!(picker.color());
        }
    }

    #[test]
    fn add_current_color_to_history() {
        let mut picker = Picker::new();
        picker.set_rgb(0, 0, 0);
        picker.add_to_history();
        assert_eq!(picker.history().get(0), Some("#000000"));
        assert_eq!(picker.history().len(), 6);

        picker.select_history(3);
        picker.add_to_history();
        assert_eq!(picker.history().get(0), Some("#10b981"));
        assert_eq!(picker.history().len(), 6);
    }

    #[test]
    fn copy_formats() {
        let picker = Picker::new();
        assert_eq!(picker.copy(Format::Rgb), "rgb(59, 130, 246)");
        assert_eq!(picker.copy(Format::Hsl), "hsl(217, 91%, 60%)");
    }

    #[test]
    fn picked_color_is_applied_and_remembered() {
        let mut picker = Picker::new();
        let changes = record(&mut picker);

        let mut dropper = || Pick::Picked("#F59E0B".to_owned());
        assert_eq!(picker.pick_with(&mut dropper), Ok(Pick::Picked("#F59E0B".to_owned())));

        assert_eq!(picker.color().hex(), "#f59e0b");
        assert_eq!(picker.history().get(0), Some("#f59e0b"));
        assert_eq!(picker.history().len(), 5);
        assert!(!picker.is_picking());
        assert_eq!(
            *changes.borrow(),
            [Changes::PICKING, Changes::PICKING | Changes::COLOR | Changes::HISTORY]
        );
    }

    #[test]
    fn cancelled_pick_changes_nothing() {
        let mut picker = Picker::new();
        let history = picker.history().clone();
        let changes = record(&mut picker);

        let mut dropper = || Pick::Cancelled;
        assert_eq!(picker.pick_with(&mut dropper), Ok(Pick::Cancelled));

        assert_eq!(picker.color(), &Color::default());
        assert_eq!(picker.history(), &history);
        assert!(!picker.is_picking());
        assert_eq!(*changes.borrow(), [Changes::PICKING, Changes::PICKING]);
    }

    #[test]
    fn unsupported_host_never_starts_a_pick() {
        let mut picker = Picker::new();
        let changes = record(&mut picker);

        assert_eq!(picker.pick_with(&mut Unsupported), Ok(Pick::Unavailable));
        assert!(!picker.is_picking());
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn only_one_pick_at_a_time() {
        let mut picker = Picker::new();
        picker.begin_pick().unwrap();
        assert!(picker.is_picking());
        assert_eq!(picker.begin_pick(), Err(PickerError::Busy));

        let mut dropper = || Pick::Picked("#000000".to_owned());
        assert_eq!(picker.pick_with(&mut dropper), Err(PickerError::Busy));
        assert_eq!(picker.color(), &Color::default());

        assert!(picker.finish_pick(Pick::Cancelled).is_none());
        assert!(!picker.is_picking());
        picker.begin_pick().unwrap();
    }

    #[test]
    fn stray_pick_result_is_ignored() {
        let mut picker = Picker::new();
        assert!(picker.finish_pick(Pick::Picked("#000000".to_owned())).is_none());
        assert_eq!(picker.color(), &Color::default());
    }

    #[test]
    fn listeners_see_the_new_state() {
        let mut picker = Picker::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = picker.subscribe(move |changes, picker| {
            sink.borrow_mut().push((changes, picker.color().hex().to_owned()))
        });

        picker.set_rgb(255, 0, 0);
        // Same color again: nothing changed, nobody is told.
        picker.set_rgb(255, 0, 0);
        picker.set_hex("#00ff00");
        assert!(picker.unsubscribe(id));
        assert!(!picker.unsubscribe(id));
        picker.set_rgb(0, 0, 255);

        assert_eq!(
            *seen.borrow(),
            [
                (Changes::COLOR, "#ff0000".to_owned()),
                (Changes::COLOR | Changes::HISTORY, "#00ff00".to_owned()),
            ]
        );
    }

    #[test]
    fn from_config() {
        let config = Config::from_toml(
            r##"
            initial = "#EF4444"
            history = ["#AABBCC", "#aabbcc", "#112233"]
            history_capacity = 2
            "##,
        )
        .unwrap();

        let mut picker = Picker::with_config(&config);
        assert_eq!(picker.color().hex(), "#ef4444");
        assert_eq!(picker.history().entries(), ["#aabbcc", "#112233"]);

        picker.set_hex("#000000");
        assert_eq!(picker.history().entries(), ["#000000", "#aabbcc"]);
    }
}
