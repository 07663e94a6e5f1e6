//! Screen⇄Welt-Projektion mit fester virtueller Kamera auf der Z-Achse.
//!
//! Die Kamera sitzt bei `CAMERA_Z` vor dem Ursprung; ein Weltpunkt wird
//! per Strahlensatz (`scale = CAMERA_Z / (CAMERA_Z - z)`) in den
//! Bildraum projiziert. Einziger freier Parameter ist `depth_offset`,
//! die Z-Ebene der aktuellen Ansicht, die per Scroll-Geste innerhalb
//! von `[DEPTH_OFFSET_MIN, DEPTH_OFFSET_MAX]` verschoben wird.

use glam::{Vec2, Vec3};

/// Explizite Projektions-/View-State-Instanz.
///
/// Kein modulglobaler Zustand: Jede Canvas hält ihre eigene `Projection`,
/// Mutation läuft ausschließlich über [`Projection::apply_scroll`].
#[derive(Debug, Clone)]
pub struct Projection {
    /// Viewport-Größe in Pixel
    pub viewport: Vec2,
    /// Z-Ebene der Ansicht in Welt-Einheiten (negativ = von der Kamera weg)
    pub depth_offset: f32,
}

impl Projection {
    /// Abstand der Kamera zum Ursprung auf der Z-Achse.
    pub const CAMERA_Z: f32 = 0.0011;
    /// Field-of-View-Argumentpaar: bei Z-Position `FIELD_ARG[0]` reicht
    /// der sichtbare Bereich vertikal von `-FIELD_ARG[1]` bis `+FIELD_ARG[1]`.
    pub const FIELD_ARG: [f32; 2] = [-0.12, 0.05];
    /// Untere Schranke des Depth-Offsets (am weitesten herausgezoomt).
    pub const DEPTH_OFFSET_MIN: f32 = -30.0;
    /// Obere Schranke des Depth-Offsets.
    pub const DEPTH_OFFSET_MAX: f32 = 0.0;
    /// Standard-Depth-Offset beim Start.
    pub const DEPTH_OFFSET_DEFAULT: f32 = -10.0;

    /// Scroll-Beschleunigung ohne Modifier.
    pub const SCROLL_ACCEL: f32 = 0.1;
    /// Scroll-Beschleunigung mit gedrückter Shift-Taste.
    pub const SCROLL_ACCEL_SHIFT: f32 = 1.0;
    /// Scroll-Beschleunigung mit gedrückter Alt-Taste.
    pub const SCROLL_ACCEL_ALT: f32 = 5.0;

    /// Erstellt eine Projektion mit Standard-Depth-Offset.
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            depth_offset: Self::DEPTH_OFFSET_DEFAULT,
        }
    }

    /// Halbe Feldhöhe auf der Kamera-Ebene (Normalisierungsfaktor).
    fn half_field() -> f32 {
        Self::FIELD_ARG[1] * Self::CAMERA_Z / (Self::CAMERA_Z - Self::FIELD_ARG[0])
    }

    /// Projiziert einen Weltpunkt in Screen-Koordinaten.
    ///
    /// Screen-Y wächst nach unten, Welt-Y nach oben; der Ursprung der
    /// Welt landet in der Viewport-Mitte.
    pub fn world_to_screen(&self, world: Vec3) -> Vec2 {
        let scale = Self::CAMERA_Z / (Self::CAMERA_Z - world.z);
        let half_h = self.viewport.y / 2.0;
        let mh = Self::half_field();
        Vec2::new(
            scale * world.x / mh * half_h + self.viewport.x / 2.0,
            half_h - scale * world.y / mh * half_h,
        )
    }

    /// Rechnet einen Screen-Punkt in die Welt zurück.
    ///
    /// Der Punkt wird auf der aktuellen `depth_offset`-Ebene angenommen;
    /// nur dort ist `screen_to_world(world_to_screen(p)) == p`.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec3 {
        let half_h = self.viewport.y / 2.0;
        let mh = Self::half_field();
        let nx = (screen.x - self.viewport.x / 2.0) / half_h * mh;
        let ny = (half_h - screen.y) / half_h * mh;
        let depth_scale = (Self::CAMERA_Z - self.depth_offset) / Self::CAMERA_Z;
        Vec3::new(nx * depth_scale, ny * depth_scale, self.depth_offset)
    }

    /// Wendet eine Scroll-Geste auf den Depth-Offset an.
    ///
    /// `delta_y` ist das rohe Scroll-Delta; Shift bzw. Alt erhöhen die
    /// Beschleunigung. Das Ergebnis wird auf den gültigen Bereich geklemmt.
    pub fn apply_scroll(&mut self, delta_y: f32, shift: bool, alt: bool) {
        let mut accel = Self::SCROLL_ACCEL;
        if shift {
            accel = Self::SCROLL_ACCEL_SHIFT;
        }
        if alt {
            accel = Self::SCROLL_ACCEL_ALT;
        }
        self.depth_offset = (self.depth_offset - delta_y * accel / 1000.0)
            .clamp(Self::DEPTH_OFFSET_MIN, Self::DEPTH_OFFSET_MAX);
    }

    /// Setzt den Depth-Offset auf den Startwert zurück.
    pub fn reset(&mut self) {
        self.depth_offset = Self::DEPTH_OFFSET_DEFAULT;
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(Vec2::new(1200.0, 800.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_world_origin_maps_to_viewport_center() {
        let proj = Projection::default();
        let screen = proj.world_to_screen(Vec3::new(0.0, 0.0, proj.depth_offset));
        assert_relative_eq!(screen.x, 600.0);
        assert_relative_eq!(screen.y, 400.0);
    }

    #[test]
    fn test_screen_y_is_flipped() {
        let proj = Projection::default();
        let up = proj.world_to_screen(Vec3::new(0.0, 1.0, proj.depth_offset));
        // Positives Welt-Y liegt oberhalb der Viewport-Mitte
        assert!(up.y < 400.0);
    }

    #[test]
    fn test_round_trip_on_depth_plane() {
        let mut proj = Projection::default();
        proj.depth_offset = -7.5;
        for &(x, y) in &[(0.0, 0.0), (1.0, -2.0), (-3.25, 0.5), (10.0, 4.0)] {
            let world = Vec3::new(x, y, proj.depth_offset);
            let back = proj.screen_to_world(proj.world_to_screen(world));
            assert_relative_eq!(back.x, world.x, epsilon = 1e-3);
            assert_relative_eq!(back.y, world.y, epsilon = 1e-3);
            assert_relative_eq!(back.z, proj.depth_offset);
        }
    }

    #[test]
    fn test_round_trip_screen_first() {
        let proj = Projection::default();
        let screen = Vec2::new(250.0, 613.0);
        let back = proj.world_to_screen(proj.screen_to_world(screen));
        assert_relative_eq!(back.x, screen.x, epsilon = 1e-2);
        assert_relative_eq!(back.y, screen.y, epsilon = 1e-2);
    }

    #[test]
    fn test_scroll_acceleration_tiers() {
        let mut proj = Projection::default();
        proj.apply_scroll(1000.0, false, false);
        assert_relative_eq!(proj.depth_offset, Projection::DEPTH_OFFSET_DEFAULT - 0.1);

        proj.depth_offset = Projection::DEPTH_OFFSET_DEFAULT;
        proj.apply_scroll(1000.0, true, false);
        assert_relative_eq!(proj.depth_offset, Projection::DEPTH_OFFSET_DEFAULT - 1.0);

        proj.depth_offset = Projection::DEPTH_OFFSET_DEFAULT;
        proj.apply_scroll(1000.0, false, true);
        assert_relative_eq!(proj.depth_offset, Projection::DEPTH_OFFSET_DEFAULT - 5.0);

        // Alt gewinnt, wenn beide Modifier gedrückt sind
        proj.depth_offset = Projection::DEPTH_OFFSET_DEFAULT;
        proj.apply_scroll(1000.0, true, true);
        assert_relative_eq!(proj.depth_offset, Projection::DEPTH_OFFSET_DEFAULT - 5.0);
    }

    #[test]
    fn test_scroll_clamps_to_bounds() {
        let mut proj = Projection::default();
        proj.apply_scroll(1.0e9, false, false);
        assert_relative_eq!(proj.depth_offset, Projection::DEPTH_OFFSET_MIN);

        proj.apply_scroll(-1.0e9, false, false);
        assert_relative_eq!(proj.depth_offset, Projection::DEPTH_OFFSET_MAX);
    }
}
