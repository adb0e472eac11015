// SPDX-License-Identifier: MPL-2.0
//! The viewer use case: album, navigation, zoom, slideshow and fullscreen.
//!
//! [`ViewerController`] owns every piece of viewer state and drives three
//! collaborators through their ports. It never blocks on time: slideshow
//! scheduling is expressed as [`SlideshowTick`] tokens the caller delivers
//! back after their delay.

use crate::application::port::{DecodedImage, DisplaySurface, ImageDecoder, Notifier};
use crate::config::{self, Config};
use crate::directory_scanner::Album;
use crate::domain::media::{fit_dimensions, Dimensions, ResampleFilter};
use crate::domain::slideshow::{Slideshow, SlideshowState, SlideshowTick};
use crate::domain::ui::ZoomLevel;
use crate::error::{Error, Result};
use crate::image_navigation::ImageNavigator;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Title of the warning shown when a folder has no images.
pub const NO_IMAGES_TITLE: &str = "No Images";

/// Title of the error dialogs.
pub const ERROR_TITLE: &str = "Error";

/// Tunables the controller needs from the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSettings {
    pub zoom_factor: f64,
    pub resample_filter: ResampleFilter,
    pub slideshow_interval: Duration,
    pub max_bitmap_edge: u32,
}

impl ViewerSettings {
    /// Resolves settings from a loaded configuration.
    ///
    /// An unknown filter name falls back to [`ResampleFilter::FALLBACK`].
    pub fn from_config(config: &Config) -> Self {
        let requested = config.resample_filter();
        let resample_filter = ResampleFilter::from_name(requested).unwrap_or_else(|| {
            tracing::warn!(
                requested,
                fallback = %ResampleFilter::FALLBACK,
                "resampling filter not available, using fallback"
            );
            ResampleFilter::FALLBACK
        });

        Self {
            zoom_factor: config.zoom_factor(),
            resample_filter,
            slideshow_interval: config.slideshow_interval(),
            max_bitmap_edge: config::MAX_BITMAP_EDGE,
        }
    }
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Single owner of the viewer state.
pub struct ViewerController<S, D, N> {
    surface: S,
    decoder: D,
    notifier: N,
    settings: ViewerSettings,
    navigator: ImageNavigator,
    zoom: ZoomLevel,
    slideshow: Slideshow,
    fullscreen: bool,
    /// Set when the current image failed to render; cleared by the next
    /// successful render.
    render_failed: bool,
}

impl<S, D, N> ViewerController<S, D, N>
where
    S: DisplaySurface,
    D: ImageDecoder,
    N: Notifier,
{
    /// Creates a controller in the empty-album state: blank canvas, default
    /// title, windowed, slideshow stopped.
    pub fn new(mut surface: S, decoder: D, notifier: N, settings: ViewerSettings) -> Self {
        surface.clear();
        surface.set_title(config::DEFAULT_TITLE);

        Self {
            surface,
            decoder,
            notifier,
            settings,
            navigator: ImageNavigator::new(),
            zoom: ZoomLevel::FIT,
            slideshow: Slideshow::new(settings.slideshow_interval),
            fullscreen: false,
            render_failed: false,
        }
    }

    // =========================================================================
    // Folder loading
    // =========================================================================

    /// Loads the folder the user picked. `None` means the picker was
    /// cancelled and leaves everything untouched.
    pub fn open_folder(&mut self, selection: Option<PathBuf>) {
        let Some(directory) = selection else {
            tracing::debug!("folder selection cancelled");
            return;
        };

        match Album::scan(&directory) {
            Ok(album) if album.is_empty() => {
                tracing::info!(directory = %directory.display(), "no supported images in folder");
                self.reset_to_empty();
                self.notifier
                    .warn(NO_IMAGES_TITLE, &Error::NoImagesFound.to_string());
            }
            Ok(album) => {
                tracing::info!(
                    directory = %directory.display(),
                    count = album.len(),
                    "folder loaded"
                );
                self.navigator.set_album(album);
                self.reset_zoom();
                self.render_current();
            }
            Err(err) => {
                tracing::warn!(directory = %directory.display(), error = %err, "failed to scan folder");
                self.reset_to_empty();
                self.notifier.error(ERROR_TITLE, &err.to_string());
            }
        }
    }

    fn reset_to_empty(&mut self) {
        self.navigator.clear();
        self.render_failed = false;
        self.reset_zoom();
        self.surface.clear();
        self.surface.set_title(config::DEFAULT_TITLE);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Decodes, fits and shows the current image.
    ///
    /// Failures are reported through the notifier and leave the canvas and
    /// title as they were. Does nothing when the album is empty.
    pub fn render_current(&mut self) {
        let Some(path) = self.navigator.current_image_path().map(Path::to_path_buf) else {
            return;
        };

        match self.render(&path) {
            Ok(()) => self.render_failed = false,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to render image");
                self.render_failed = true;
                self.notifier
                    .error(ERROR_TITLE, &format!("Unable to load image.\n{err}"));
            }
        }
    }

    fn render(&mut self, path: &Path) -> Result<()> {
        let image = self.decoder.open(path)?;
        let native = image.dimensions();
        if native.is_empty() {
            return Err(Error::Decode(format!(
                "Invalid dimensions: {}x{}",
                native.width, native.height
            )));
        }

        let canvas = self.surface.canvas_size();
        let Some(target) = fit_dimensions(
            native,
            canvas,
            self.zoom.value(),
            self.settings.max_bitmap_edge,
        ) else {
            tracing::debug!(
                canvas_width = canvas.width,
                canvas_height = canvas.height,
                "canvas has no drawable area, skipping render"
            );
            return Ok(());
        };

        let bitmap = image.resize(target, self.settings.resample_filter)?;

        tracing::debug!(
            path = %path.display(),
            native_width = native.width,
            native_height = native.height,
            width = target.width,
            height = target.height,
            zoom = self.zoom.value(),
            "rendered image"
        );

        self.surface.show(bitmap);
        self.surface.set_title(&display_name(path));
        Ok(())
    }

    /// Re-renders after the canvas changed size.
    ///
    /// An image that already failed to render is left alone until the user
    /// navigates or zooms.
    pub fn refit(&mut self) {
        if self.render_failed {
            tracing::debug!("skipping refit of an image that failed to render");
            return;
        }
        self.render_current();
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Moves to the next image (wrapping), resets zoom and renders.
    pub fn next(&mut self) {
        if self.navigator.navigate_next().is_some() {
            self.reset_zoom();
            self.render_current();
        }
    }

    /// Moves to the previous image (wrapping), resets zoom and renders.
    pub fn previous(&mut self) {
        if self.navigator.navigate_previous().is_some() {
            self.reset_zoom();
            self.render_current();
        }
    }

    // =========================================================================
    // Zoom
    // =========================================================================

    fn reset_zoom(&mut self) {
        if !self.zoom.is_fit() {
            tracing::debug!(zoom = self.zoom.value(), "zoom reset to fit");
            self.zoom = ZoomLevel::FIT;
        }
    }

    pub fn zoom_in(&mut self) {
        if self.navigator.is_empty() {
            return;
        }
        self.zoom = self.zoom.zoom_in(self.settings.zoom_factor);
        self.render_current();
    }

    pub fn zoom_out(&mut self) {
        if self.navigator.is_empty() {
            return;
        }
        self.zoom = self.zoom.zoom_out(self.settings.zoom_factor);
        self.render_current();
    }

    // =========================================================================
    // Slideshow
    // =========================================================================

    /// Starts the slideshow and advances once right away.
    ///
    /// Returns the tick to schedule, or `None` if it was already running.
    pub fn start_slideshow(&mut self) -> Option<SlideshowTick> {
        let tick = self.slideshow.start()?;
        tracing::info!(interval = ?tick.delay(), "slideshow started");
        self.next();
        Some(tick)
    }

    /// Stops the slideshow. Returns false if it was not running.
    pub fn stop_slideshow(&mut self) -> bool {
        let stopped = self.slideshow.stop();
        if stopped {
            tracing::info!("slideshow stopped");
        }
        stopped
    }

    /// Starts a stopped slideshow or stops a running one.
    pub fn toggle_slideshow(&mut self) -> Option<SlideshowTick> {
        if self.slideshow.is_running() {
            self.stop_slideshow();
            None
        } else {
            self.start_slideshow()
        }
    }

    /// Handles a delivered tick.
    ///
    /// Stale ticks are dropped. A current tick advances (when there is
    /// anything to advance through) and yields the next tick to schedule.
    pub fn on_slideshow_tick(&mut self, tick: SlideshowTick) -> Option<SlideshowTick> {
        if !self.slideshow.accepts(tick) {
            tracing::debug!(generation = tick.generation(), "dropping stale slideshow tick");
            return None;
        }

        self.next();
        self.slideshow.next_tick()
    }

    // =========================================================================
    // Fullscreen
    // =========================================================================

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        self.surface.set_fullscreen(self.fullscreen);
    }

    /// Leaves fullscreen. Returns false if the window was not fullscreen.
    pub fn exit_fullscreen(&mut self) -> bool {
        if !self.fullscreen {
            return false;
        }
        self.fullscreen = false;
        self.surface.set_fullscreen(false);
        true
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn current_index(&self) -> Option<usize> {
        self.navigator.current_index()
    }

    pub fn current_image_path(&self) -> Option<&Path> {
        self.navigator.current_image_path()
    }

    pub fn album(&self) -> &Album {
        self.navigator.album()
    }

    pub fn zoom_level(&self) -> f64 {
        self.zoom.value()
    }

    pub fn slideshow_state(&self) -> SlideshowState {
        self.slideshow.state()
    }

    pub fn is_slideshow_running(&self) -> bool {
        self.slideshow.is_running()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Size the canvas gets inside a window of `window` logical pixels.
pub fn canvas_size_for_window(window: Dimensions) -> Dimensions {
    Dimensions::new(
        window.width.saturating_sub(config::CANVAS_MARGIN_WIDTH),
        window.height.saturating_sub(config::CANVAS_MARGIN_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::DecodeError;
    use crate::domain::media::Bitmap;
    use crate::test_utils::assert_abs_diff_eq;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    // -------------------------------------------------------------------------
    // Fakes
    // -------------------------------------------------------------------------

    #[derive(Debug)]
    struct FakeSurface {
        canvas: Dimensions,
        shown: Option<Dimensions>,
        title: String,
        fullscreen_calls: Vec<bool>,
        show_count: usize,
    }

    impl FakeSurface {
        fn new() -> Self {
            Self {
                canvas: Dimensions::new(900, 500),
                shown: None,
                title: String::new(),
                fullscreen_calls: Vec::new(),
                show_count: 0,
            }
        }
    }

    impl DisplaySurface for FakeSurface {
        fn canvas_size(&self) -> Dimensions {
            self.canvas
        }

        fn show(&mut self, bitmap: Bitmap) {
            self.shown = Some(bitmap.dimensions());
            self.show_count += 1;
        }

        fn clear(&mut self) {
            self.shown = None;
        }

        fn set_title(&mut self, title: &str) {
            self.title = title.to_string();
        }

        fn set_fullscreen(&mut self, fullscreen: bool) {
            self.fullscreen_calls.push(fullscreen);
        }
    }

    struct FakeImage(Dimensions);

    impl DecodedImage for FakeImage {
        fn dimensions(&self) -> Dimensions {
            self.0
        }

        fn resize(
            &self,
            target: Dimensions,
            _filter: ResampleFilter,
        ) -> std::result::Result<Bitmap, DecodeError> {
            Bitmap::from_rgba(
                target.width,
                target.height,
                vec![0; target.pixel_count() * 4],
            )
            .ok_or(DecodeError::ResizeFailed("buffer".into()))
        }
    }

    /// Decodes by file name; anything not listed is 1800x1000.
    #[derive(Default)]
    struct FakeDecoder {
        broken: HashMap<String, DecodeError>,
    }

    impl ImageDecoder for FakeDecoder {
        type Image = FakeImage;

        fn open(&self, path: &Path) -> std::result::Result<FakeImage, DecodeError> {
            let name = display_name(path);
            match self.broken.get(&name) {
                Some(err) => Err(err.clone()),
                None => Ok(FakeImage(Dimensions::new(1800, 1000))),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Notice {
        Warning(String, String),
        Error(String, String),
    }

    #[derive(Default)]
    struct CollectingNotifier {
        notices: Vec<Notice>,
    }

    impl Notifier for CollectingNotifier {
        fn warn(&mut self, title: &str, message: &str) {
            self.notices
                .push(Notice::Warning(title.to_string(), message.to_string()));
        }

        fn error(&mut self, title: &str, message: &str) {
            self.notices
                .push(Notice::Error(title.to_string(), message.to_string()));
        }
    }

    type TestController = ViewerController<FakeSurface, FakeDecoder, CollectingNotifier>;

    fn controller_with(decoder: FakeDecoder) -> TestController {
        ViewerController::new(
            FakeSurface::new(),
            decoder,
            CollectingNotifier::default(),
            ViewerSettings::default(),
        )
    }

    fn controller() -> TestController {
        controller_with(FakeDecoder::default())
    }

    fn folder(names: &[&str]) -> TempDir {
        let dir = tempdir().expect("failed to create temp dir");
        for name in names {
            fs::write(dir.path().join(name), b"fake image data").expect("failed to write file");
        }
        dir
    }

    fn loaded(names: &[&str]) -> (TempDir, TestController) {
        let dir = folder(names);
        let mut viewer = controller();
        viewer.open_folder(Some(dir.path().to_path_buf()));
        (dir, viewer)
    }

    // -------------------------------------------------------------------------
    // Folder loading
    // -------------------------------------------------------------------------

    #[test]
    fn starts_in_empty_state() {
        let viewer = controller();
        assert!(viewer.album().is_empty());
        assert_eq!(viewer.surface().title, "Image Viewer");
        assert_eq!(viewer.surface().shown, None);
        assert!(!viewer.is_slideshow_running());
        assert!(!viewer.is_fullscreen());
    }

    #[test]
    fn open_folder_sorts_filters_and_renders_first() {
        let (_dir, viewer) = loaded(&["b.png", "a.jpg", "c.gif", "notes.txt"]);

        let names: Vec<_> = viewer.album().iter().map(display_name).collect();
        assert_eq!(names, vec!["a.jpg", "b.png", "c.gif"]);
        assert_eq!(viewer.current_index(), Some(0));
        assert_eq!(viewer.surface().title, "a.jpg");
        assert_eq!(viewer.surface().shown, Some(Dimensions::new(900, 500)));
        assert!(viewer.notifier().notices.is_empty());
    }

    #[test]
    fn open_folder_without_images_warns_and_resets() {
        let (_dir, mut viewer) = loaded(&["a.png", "b.png"]);
        viewer.next();

        let empty = folder(&["notes.txt"]);
        viewer.open_folder(Some(empty.path().to_path_buf()));

        assert!(viewer.album().is_empty());
        assert_eq!(viewer.current_index(), None);
        assert_eq!(viewer.surface().shown, None);
        assert_eq!(viewer.surface().title, "Image Viewer");
        assert_eq!(
            viewer.notifier().notices,
            vec![Notice::Warning(
                "No Images".into(),
                "No supported image files found in this folder.".into()
            )]
        );
    }

    #[test]
    fn cancelled_selection_changes_nothing() {
        let (_dir, mut viewer) = loaded(&["a.png", "b.png"]);
        viewer.next();
        viewer.zoom_in();

        viewer.open_folder(None);

        assert_eq!(viewer.current_index(), Some(1));
        assert_abs_diff_eq!(viewer.zoom_level(), 1.25);
        assert_eq!(viewer.surface().title, "b.png");
        assert!(viewer.notifier().notices.is_empty());
    }

    #[test]
    fn unreadable_folder_reports_error_and_empties_album() {
        let (dir, mut viewer) = loaded(&["a.png"]);
        let missing = dir.path().join("vanished");

        viewer.open_folder(Some(missing));

        assert!(viewer.album().is_empty());
        assert_eq!(viewer.surface().title, "Image Viewer");
        assert!(matches!(
            viewer.notifier().notices.as_slice(),
            [Notice::Error(title, message)] if title == "Error" && message.starts_with("I/O error: ")
        ));
    }

    #[test]
    fn open_folder_resets_zoom() {
        let (dir, mut viewer) = loaded(&["a.png"]);
        viewer.zoom_in();
        viewer.open_folder(Some(dir.path().to_path_buf()));
        assert_eq!(viewer.zoom_level(), 1.0);
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    #[test]
    fn decode_failure_keeps_previous_display() {
        let dir = folder(&["a.png", "b.png"]);
        let mut decoder = FakeDecoder::default();
        decoder.broken.insert(
            "b.png".into(),
            DecodeError::CorruptedData("bad header".into()),
        );
        let mut viewer = controller_with(decoder);
        viewer.open_folder(Some(dir.path().to_path_buf()));

        viewer.next();

        assert_eq!(viewer.current_index(), Some(1));
        assert_eq!(viewer.surface().title, "a.png");
        assert_eq!(viewer.surface().shown, Some(Dimensions::new(900, 500)));
        assert_eq!(
            viewer.notifier().notices,
            vec![Notice::Error(
                "Error".into(),
                "Unable to load image.\nCorrupted image data: bad header".into()
            )]
        );
    }

    #[test]
    fn refit_does_not_retry_a_failed_render() {
        let dir = folder(&["a.png", "b.png"]);
        let mut decoder = FakeDecoder::default();
        decoder.broken.insert(
            "a.png".into(),
            DecodeError::CorruptedData("bad header".into()),
        );
        let mut viewer = controller_with(decoder);
        viewer.open_folder(Some(dir.path().to_path_buf()));
        assert_eq!(viewer.notifier().notices.len(), 1);

        for width in [950, 960, 970] {
            viewer.surface_mut().canvas = Dimensions::new(width, 500);
            viewer.refit();
        }
        assert_eq!(viewer.notifier().notices.len(), 1);
        assert_eq!(viewer.surface().shown, None);

        viewer.next();
        assert_eq!(viewer.surface().title, "b.png");
        viewer.surface_mut().canvas = Dimensions::new(450, 450);
        viewer.refit();
        assert_eq!(viewer.surface().shown, Some(Dimensions::new(450, 250)));
        assert_eq!(viewer.notifier().notices.len(), 1);
    }

    #[test]
    fn refit_uses_new_canvas_size() {
        let (_dir, mut viewer) = loaded(&["a.png"]);
        viewer.surface_mut().canvas = Dimensions::new(450, 450);
        viewer.refit();
        assert_eq!(viewer.surface().shown, Some(Dimensions::new(450, 250)));
    }

    #[test]
    fn empty_canvas_skips_render_silently() {
        let dir = folder(&["a.png"]);
        let mut viewer = controller();
        viewer.surface_mut().canvas = Dimensions::new(0, 0);
        viewer.open_folder(Some(dir.path().to_path_buf()));

        assert_eq!(viewer.surface().shown, None);
        assert!(viewer.notifier().notices.is_empty());
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    #[test]
    fn next_and_previous_cycle_back_to_start() {
        let (_dir, mut viewer) = loaded(&["a.png", "b.png", "c.png"]);
        for _ in 0..3 {
            viewer.next();
        }
        assert_eq!(viewer.current_index(), Some(0));
        for _ in 0..3 {
            viewer.previous();
        }
        assert_eq!(viewer.current_index(), Some(0));
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let (_dir, mut viewer) = loaded(&["a.png", "b.png", "c.png"]);
        viewer.previous();
        assert_eq!(viewer.current_index(), Some(2));
        assert_eq!(viewer.surface().title, "c.png");
    }

    #[test]
    fn next_then_previous_is_identity() {
        let (_dir, mut viewer) = loaded(&["a.png", "b.png"]);
        viewer.next();
        viewer.previous();
        assert_eq!(viewer.current_index(), Some(0));
        viewer.previous();
        viewer.next();
        assert_eq!(viewer.current_index(), Some(0));
    }

    #[test]
    fn navigation_resets_zoom() {
        let (_dir, mut viewer) = loaded(&["a.png", "b.png"]);
        viewer.zoom_in();
        viewer.zoom_in();
        viewer.next();
        assert_eq!(viewer.zoom_level(), 1.0);

        viewer.zoom_out();
        viewer.previous();
        assert_eq!(viewer.zoom_level(), 1.0);
    }

    #[test]
    fn empty_album_operations_are_noops() {
        let mut viewer = controller();
        viewer.next();
        viewer.previous();
        viewer.zoom_in();
        viewer.zoom_out();

        assert_eq!(viewer.current_index(), None);
        assert_eq!(viewer.zoom_level(), 1.0);
        assert_eq!(viewer.surface().show_count, 0);
        assert!(viewer.notifier().notices.is_empty());
    }

    // -------------------------------------------------------------------------
    // Zoom
    // -------------------------------------------------------------------------

    #[test]
    fn zoom_in_scales_rendered_bitmap() {
        let (_dir, mut viewer) = loaded(&["a.png"]);
        viewer.zoom_in();
        assert_abs_diff_eq!(viewer.zoom_level(), 1.25);
        assert_eq!(viewer.surface().shown, Some(Dimensions::new(1125, 625)));
    }

    #[test]
    fn zoom_in_then_out_restores_level() {
        let (_dir, mut viewer) = loaded(&["a.png"]);
        viewer.zoom_in();
        viewer.zoom_out();
        assert_abs_diff_eq!(viewer.zoom_level(), 1.0);
        viewer.zoom_out();
        viewer.zoom_in();
        assert_abs_diff_eq!(viewer.zoom_level(), 1.0);
    }

    // -------------------------------------------------------------------------
    // Slideshow
    // -------------------------------------------------------------------------

    #[test]
    fn start_advances_immediately_and_schedules() {
        let (_dir, mut viewer) = loaded(&["a.png", "b.png"]);
        let tick = viewer.start_slideshow().expect("tick");

        assert!(viewer.is_slideshow_running());
        assert_eq!(viewer.current_index(), Some(1));
        assert_eq!(tick.delay(), Duration::from_millis(2000));
    }

    #[test]
    fn double_start_schedules_once() {
        let (_dir, mut viewer) = loaded(&["a.png", "b.png", "c.png"]);
        assert!(viewer.start_slideshow().is_some());
        assert!(viewer.start_slideshow().is_none());
        assert!(viewer.is_slideshow_running());
        assert_eq!(viewer.current_index(), Some(1));
    }

    #[test]
    fn restart_runs_under_a_new_generation() {
        let (_dir, mut viewer) = loaded(&["a.png", "b.png"]);
        assert_eq!(viewer.slideshow_state(), SlideshowState::Stopped);

        viewer.start_slideshow();
        assert_eq!(
            viewer.slideshow_state(),
            SlideshowState::Running { generation: 1 }
        );
        viewer.stop_slideshow();
        viewer.start_slideshow();
        assert_eq!(
            viewer.slideshow_state(),
            SlideshowState::Running { generation: 2 }
        );
    }

    #[test]
    fn stop_when_stopped_is_noop() {
        let mut viewer = controller();
        assert!(!viewer.stop_slideshow());
        assert!(!viewer.is_slideshow_running());
    }

    #[test]
    fn tick_advances_and_reschedules() {
        let (_dir, mut viewer) = loaded(&["a.png", "b.png", "c.png"]);
        let tick = viewer.start_slideshow().expect("tick");
        let next = viewer.on_slideshow_tick(tick).expect("next tick");

        assert_eq!(viewer.current_index(), Some(2));
        assert_eq!(next.generation(), tick.generation());
    }

    #[test]
    fn tick_after_stop_does_not_navigate() {
        let (_dir, mut viewer) = loaded(&["a.png", "b.png", "c.png"]);
        let tick = viewer.start_slideshow().expect("tick");
        viewer.stop_slideshow();

        assert!(viewer.on_slideshow_tick(tick).is_none());
        assert_eq!(viewer.current_index(), Some(1));
    }

    #[test]
    fn tick_from_previous_run_is_dropped_after_restart() {
        let (_dir, mut viewer) = loaded(&["a.png", "b.png", "c.png", "d.png"]);
        let old = viewer.start_slideshow().expect("tick");
        viewer.stop_slideshow();
        let _new = viewer.start_slideshow().expect("tick");
        let index = viewer.current_index();

        assert!(viewer.on_slideshow_tick(old).is_none());
        assert_eq!(viewer.current_index(), index);
    }

    #[test]
    fn slideshow_on_empty_album_keeps_rescheduling() {
        let mut viewer = controller();
        let tick = viewer.start_slideshow().expect("tick");
        let next = viewer.on_slideshow_tick(tick).expect("reschedules");

        assert_eq!(viewer.current_index(), None);
        assert!(viewer.notifier().notices.is_empty());

        let dir = folder(&["a.png", "b.png"]);
        viewer.open_folder(Some(dir.path().to_path_buf()));
        viewer.on_slideshow_tick(next).expect("reschedules");
        assert_eq!(viewer.current_index(), Some(1));
    }

    #[test]
    fn toggle_slideshow_flips_state() {
        let (_dir, mut viewer) = loaded(&["a.png", "b.png"]);
        assert!(viewer.toggle_slideshow().is_some());
        assert!(viewer.is_slideshow_running());
        assert!(viewer.toggle_slideshow().is_none());
        assert!(!viewer.is_slideshow_running());
    }

    // -------------------------------------------------------------------------
    // Fullscreen
    // -------------------------------------------------------------------------

    #[test]
    fn fullscreen_attribute_mirrors_flag() {
        let mut viewer = controller();
        viewer.toggle_fullscreen();
        assert!(viewer.is_fullscreen());
        viewer.toggle_fullscreen();
        assert!(!viewer.is_fullscreen());
        assert_eq!(viewer.surface().fullscreen_calls, vec![true, false]);
    }

    #[test]
    fn exit_fullscreen_only_acts_when_fullscreen() {
        let mut viewer = controller();
        assert!(!viewer.exit_fullscreen());
        assert!(viewer.surface().fullscreen_calls.is_empty());

        viewer.toggle_fullscreen();
        assert!(viewer.exit_fullscreen());
        assert!(!viewer.is_fullscreen());
        assert_eq!(viewer.surface().fullscreen_calls, vec![true, false]);
    }

    // -------------------------------------------------------------------------
    // Settings
    // -------------------------------------------------------------------------

    #[test]
    fn unknown_filter_name_falls_back() {
        let mut config = Config::default();
        config.display.resample_filter = Some("supersample".into());
        let settings = ViewerSettings::from_config(&config);
        assert_eq!(settings.resample_filter, ResampleFilter::Triangle);
    }

    #[test]
    fn default_settings_use_lanczos() {
        let settings = ViewerSettings::default();
        assert_eq!(settings.resample_filter, ResampleFilter::Lanczos3);
        assert_abs_diff_eq!(settings.zoom_factor, 1.25);
        assert_eq!(settings.slideshow_interval, Duration::from_millis(2000));
    }

    #[test]
    fn canvas_is_window_minus_chrome() {
        assert_eq!(
            canvas_size_for_window(Dimensions::new(1000, 600)),
            Dimensions::new(900, 500)
        );
        assert_eq!(
            canvas_size_for_window(Dimensions::new(50, 50)),
            Dimensions::new(0, 0)
        );
    }
}
