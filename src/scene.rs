use glam::{Mat4, Vec3};

use crate::config::SceneConfig;
use crate::flight::Airplane;

pub const MAX_LIGHTS: usize = 4;
pub const LIGHT_HEIGHT: f32 = 2.0;
pub const LIGHT_MARKER_SCALE: f32 = 0.2;
/// Cubes are unit sized and centered on y = 0
pub const FLOOR_HEIGHT: f32 = -0.5;

/// GPU mesh a draw refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Cube,
    Floor,
    Airplane,
}

/// Texture a draw samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    Crate,
    Floor,
    Airplane,
    /// Plain white, for unlit markers
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
}

/// One draw call worth of state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub mesh: MeshKind,
    pub material: Material,
    pub model: Mat4,
    pub tint: [f32; 4],
    pub unlit: bool,
}

/// Static part of the scene: cubes on a grid, light markers above them and the floor
#[derive(Debug, Clone)]
pub struct SceneLayout {
    pub cubes: Vec<Vec3>,
    pub lights: Vec<PointLight>,
    pub floor_extent: f32,
}

impl SceneLayout {
    pub fn new(config: &SceneConfig) -> Self {
        let s = config.spacing;
        let cubes = vec![
            Vec3::new(0.0, 0.0, s),
            Vec3::new(s, 0.0, 0.0),
            Vec3::new(s, 0.0, s),
            Vec3::new(0.0, 0.0, 0.0),
        ];

        let colors = [
            Vec3::new(1.0, 0.9, 0.7),
            Vec3::new(0.6, 0.8, 1.0),
            Vec3::new(1.0, 0.6, 0.6),
            Vec3::new(0.7, 1.0, 0.7),
        ];

        let lights = cubes
            .iter()
            .zip(colors)
            .map(|(cube, color)| PointLight {
                position: Vec3::new(cube.x, LIGHT_HEIGHT, cube.z),
                color,
            })
            .collect();

        Self {
            cubes,
            lights,
            floor_extent: config.floor_extent,
        }
    }

    /// Draws for one frame; the airplane goes last
    pub fn draw_list(&self, airplane: &Airplane) -> Vec<DrawCommand> {
        let floor = DrawCommand {
            mesh: MeshKind::Floor,
            material: Material::Floor,
            model: Mat4::IDENTITY,
            tint: [1.0; 4],
            unlit: false,
        };

        let cubes = self.cubes.iter().map(|&position| DrawCommand {
            mesh: MeshKind::Cube,
            material: Material::Crate,
            model: Mat4::from_translation(position),
            tint: [1.0; 4],
            unlit: false,
        });

        let markers = self.lights.iter().map(|light| DrawCommand {
            mesh: MeshKind::Cube,
            material: Material::Blank,
            model: Mat4::from_scale_rotation_translation(
                Vec3::splat(LIGHT_MARKER_SCALE),
                glam::Quat::IDENTITY,
                light.position,
            ),
            tint: light.color.extend(1.0).to_array(),
            unlit: true,
        });

        let plane = DrawCommand {
            mesh: MeshKind::Airplane,
            material: Material::Airplane,
            model: airplane.model_matrix(),
            tint: [1.0; 4],
            unlit: false,
        };

        std::iter::once(floor)
            .chain(cubes)
            .chain(markers)
            .chain(std::iter::once(plane))
            .collect()
    }
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self::new(&SceneConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubes_sit_on_a_grid() {
        let scene = SceneLayout::default();
        assert_eq!(
            scene.cubes,
            vec![
                Vec3::new(0.0, 0.0, 10.0),
                Vec3::new(10.0, 0.0, 0.0),
                Vec3::new(10.0, 0.0, 10.0),
                Vec3::new(0.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn lights_hover_above_cubes() {
        let scene = SceneLayout::default();
        assert_eq!(scene.lights.len(), MAX_LIGHTS);
        for (light, cube) in scene.lights.iter().zip(&scene.cubes) {
            assert_eq!(light.position, Vec3::new(cube.x, LIGHT_HEIGHT, cube.z));
        }
    }

    #[test]
    fn draw_list_ends_with_airplane() {
        let scene = SceneLayout::default();
        let airplane = Airplane::default();
        let draws = scene.draw_list(&airplane);

        assert_eq!(draws.len(), 1 + 4 + 4 + 1);
        assert_eq!(draws[0].mesh, MeshKind::Floor);

        let last = draws.last().unwrap();
        assert_eq!(last.mesh, MeshKind::Airplane);
        assert_eq!(last.model, airplane.model_matrix());
    }

    #[test]
    fn only_light_markers_are_unlit() {
        let scene = SceneLayout::default();
        let draws = scene.draw_list(&Airplane::default());

        let unlit: Vec<_> = draws.iter().filter(|d| d.unlit).collect();
        assert_eq!(unlit.len(), 4);
        for draw in unlit {
            assert_eq!(draw.material, Material::Blank);
            assert!((draw.model.x_axis.x - LIGHT_MARKER_SCALE).abs() < 1e-6);
        }
    }
}
