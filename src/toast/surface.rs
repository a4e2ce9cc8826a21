// SPDX-License-Identifier: MPL-2.0
//! The drawing surface a toast is placed on.
//!
//! The presenter never reaches into the window system directly; it asks a
//! [`SurfaceProvider`] for the current surface size and bottom safe-area inset.

use iced::Size;

/// Dimensions of the top-level surface a toast is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceMetrics {
    pub size: Size,
    /// Bottom margin reserved by the host (home indicator, taskbar, ...).
    pub safe_area_bottom: f32,
}

impl SurfaceMetrics {
    #[must_use]
    pub fn new(size: Size, safe_area_bottom: f32) -> Self {
        Self {
            size,
            safe_area_bottom,
        }
    }
}

/// Supplies the metrics of the top-level visible surface.
pub trait SurfaceProvider {
    /// Returns `None` when no surface is currently available.
    fn metrics(&self) -> Option<SurfaceMetrics>;
}

/// A surface that tracks a window, updated from resize events.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowSurface {
    metrics: Option<SurfaceMetrics>,
    safe_area_bottom: f32,
}

impl WindowSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a surface that already knows its window size.
    #[must_use]
    pub fn with_size(size: Size) -> Self {
        let mut surface = Self::new();
        surface.resize(size);
        surface
    }

    /// Records a new window size, keeping the current safe-area inset.
    pub fn resize(&mut self, size: Size) {
        self.metrics = Some(SurfaceMetrics::new(size, self.safe_area_bottom));
    }

    pub fn set_safe_area_bottom(&mut self, inset: f32) {
        self.safe_area_bottom = inset.max(0.0);
        if let Some(metrics) = &mut self.metrics {
            metrics.safe_area_bottom = self.safe_area_bottom;
        }
    }

    /// Forgets the window, e.g. after it was closed.
    pub fn detach(&mut self) {
        self.metrics = None;
    }
}

impl SurfaceProvider for WindowSurface {
    fn metrics(&self) -> Option<SurfaceMetrics> {
        self.metrics
    }
}

/// A surface with constant metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSurface(pub SurfaceMetrics);

impl SurfaceProvider for FixedSurface {
    fn metrics(&self) -> Option<SurfaceMetrics> {
        Some(self.0)
    }
}
