use macroquad::prelude::*;
use tracing::info;
use uav_kinematics::Point;

// Function to configure the macroquad window
pub fn window_conf() -> Conf {
    Conf {
        window_title: "UAV Path Viewer".to_string(),
        window_width: 800,
        window_height: 600,
        high_dpi: true,
        ..Default::default()
    }
}

const MARGIN_PX: f32 = 40.0;

/// What the viewer draws: the start pose, the planned waypoints and the target.
#[derive(Debug, Clone)]
pub struct Scene {
    pub start: Point,
    pub heading: f64,
    pub target: Point,
    pub path: Vec<Point>,
    /// Upper bound on pixels per distance unit.
    pub max_scale: f32,
}

impl Scene {
    fn bounds(&self) -> (Vec2, Vec2) {
        let mut min = to_vec2(self.start);
        let mut max = min;
        for p in self.path.iter().copied().chain(std::iter::once(self.target)) {
            let v = to_vec2(p);
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }
}

fn to_vec2(p: Point) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

/// Maps world coordinates onto the window, y up, fitting the scene's bounds.
struct View {
    center: Vec2,
    scale: f32,
}

impl View {
    fn fit(scene: &Scene) -> Self {
        let (min, max) = scene.bounds();
        let extent = (max - min).max(Vec2::splat(1e-3));
        let fit_x = (screen_width() - 2.0 * MARGIN_PX) / extent.x;
        let fit_y = (screen_height() - 2.0 * MARGIN_PX) / extent.y;
        Self {
            center: (min + max) / 2.0,
            scale: fit_x.min(fit_y).min(scene.max_scale),
        }
    }

    fn to_screen(&self, p: Point) -> Vec2 {
        let offset = (to_vec2(p) - self.center) * self.scale;
        Vec2::new(screen_width() / 2.0 + offset.x, screen_height() / 2.0 - offset.y)
    }
}

/// Draws `scene` until the window is closed or Escape is pressed.
pub async fn run_path_view(scene: Scene) {
    info!(waypoints = scene.path.len(), "Path viewer starting...");

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        clear_background(LIGHTGRAY);
        let view = View::fit(&scene);

        for pair in scene.path.windows(2) {
            let a = view.to_screen(pair[0]);
            let b = view.to_screen(pair[1]);
            draw_line(a.x, a.y, b.x, b.y, 2.0, DARKGREEN);
        }
        for p in &scene.path {
            let s = view.to_screen(*p);
            draw_circle(s.x, s.y, 3.0, DARKGREEN);
        }

        let target = view.to_screen(scene.target);
        draw_circle(target.x, target.y, 8.0, RED);

        // start pose arrow; screen y grows downward
        let start = view.to_screen(scene.start);
        let th = -(scene.heading.to_radians() as f32);
        let r_size = 12.0;
        let p1 = Vec2::new(start.x + r_size * th.cos(), start.y + r_size * th.sin());
        let p2 = Vec2::new(
            start.x + r_size * (th + 2.0 * std::f32::consts::PI / 3.0).cos(),
            start.y + r_size * (th + 2.0 * std::f32::consts::PI / 3.0).sin(),
        );
        let p3 = Vec2::new(
            start.x + r_size * (th - 2.0 * std::f32::consts::PI / 3.0).cos(),
            start.y + r_size * (th - 2.0 * std::f32::consts::PI / 3.0).sin(),
        );
        draw_triangle(p1, p2, p3, BLUE);
        draw_line(start.x, start.y, p1.x, p1.y, 2.0, DARKBLUE);

        draw_text(
            &format!("Start: {} heading {:.1} deg", scene.start, scene.heading),
            10.0,
            20.0,
            20.0,
            BLACK,
        );
        draw_text(&format!("Target: {}", scene.target), 10.0, 40.0, 20.0, BLACK);
        let status = if scene.path.is_empty() {
            "No path found".to_string()
        } else {
            format!("Waypoints: {}", scene.path.len())
        };
        draw_text(&status, 10.0, 60.0, 20.0, BLACK);

        next_frame().await
    }

    info!("Path viewer closed.");
}
