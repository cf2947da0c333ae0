//! Demo world population: noise heightmap terrain plus a few scripted shapes.

use fastnoise_lite::{FastNoiseLite, NoiseType};
use mini3d_blocks::BlocksConfig;
use mini3d_world::VoxelWorld;

/// Fill the world with rolling terrain (stone body, dirt cap, grass top) and
/// the pillar/lump/post trio from the original demo client.
pub fn populate(world: &mut VoxelWorld, cfg: &BlocksConfig, seed: i32) {
    let grass = cfg.id_by_name("grass").unwrap_or(1);
    let dirt = cfg.id_by_name("dirt").unwrap_or(3);
    let stone = cfg.id_by_name("stone").unwrap_or(5);
    let snow = cfg.id_by_name("snow").unwrap_or(8);

    let (sx, sy, sz) = world.dims();
    let mut noise = FastNoiseLite::with_seed(seed);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(0.03));

    for z in 0..sz {
        for x in 0..sx {
            let n = (noise.get_noise_2d(x as f32, z as f32) + 1.0) * 0.5;
            // column heights around 10..32, as in the original prototype
            let h = ((10.0 + n * 22.0) as i32).clamp(1, sy);
            let top = h - 1;
            if top >= 3 {
                world.fill_box(x, 0, z, x, top - 3, z, stone);
            }
            if top >= 1 {
                world.fill_box(x, (top - 2).max(0), z, x, top - 1, z, dirt);
            }
            world.set(x, top, z, grass);
        }
    }

    // scripted scene shapes (stone pillar, dirt lump, snow post)
    if sx > 30 && sz > 22 {
        let base = surface_height(world, 10, 10);
        world.fill_box(10, base, 10, 10, base + 4, 10, stone);
        let base = surface_height(world, 21, 21);
        world.fill_box(20, base, 20, 22, base + 2, 22, dirt);
        let base = surface_height(world, 30, 15);
        world.fill_box(30, base, 15, 30, base + 7, 15, snow);
    }
}

/// First free y above the tallest block of a column (0 for an empty column).
fn surface_height(world: &VoxelWorld, x: i32, z: i32) -> i32 {
    let (_, sy, _) = world.dims();
    for y in (0..sy).rev() {
        if world.get(x, y, z) != 0 {
            return y + 1;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use mini3d_blocks::BlocksConfig;

    fn demo_cfg() -> BlocksConfig {
        BlocksConfig::from_toml_str(
            r#"
            [[blocks]]
            name = "grass"
            id = 1
            tile = 0
            [[blocks]]
            name = "dirt"
            id = 3
            tile = 2
            [[blocks]]
            name = "stone"
            id = 5
            tile = 4
            [[blocks]]
            name = "snow"
            id = 8
            tile = 7
        "#,
        )
        .unwrap()
    }

    #[test]
    fn every_column_has_a_grass_surface() {
        let mut world = VoxelWorld::new(64, 40, 64).unwrap();
        populate(&mut world, &demo_cfg(), 42);
        let mut columns_checked = 0;
        for z in 0..64 {
            for x in 0..64 {
                // skip the scripted shapes; they cap columns with other ids
                if (x, z) == (10, 10) || (20..=22).contains(&x) && (20..=22).contains(&z)
                    || (x, z) == (30, 15)
                {
                    continue;
                }
                let top = surface_height(&world, x, z) - 1;
                assert!(top >= 0, "empty column at ({x},{z})");
                assert!((9..32).contains(&top), "top {top} out of range");
                assert_eq!(world.get(x, top, z), 1, "no grass at ({x},{top},{z})");
                columns_checked += 1;
            }
        }
        assert!(columns_checked > 4000);
    }

    #[test]
    fn populate_is_deterministic_per_seed() {
        let mut a = VoxelWorld::new(32, 36, 32).unwrap();
        let mut b = VoxelWorld::new(32, 36, 32).unwrap();
        populate(&mut a, &demo_cfg(), 7);
        populate(&mut b, &demo_cfg(), 7);
        for z in 0..32 {
            for y in 0..36 {
                for x in 0..32 {
                    assert_eq!(a.get(x, y, z), b.get(x, y, z));
                }
            }
        }
    }

    #[test]
    fn scripted_shapes_sit_on_the_surface() {
        let mut world = VoxelWorld::new(64, 40, 64).unwrap();
        populate(&mut world, &demo_cfg(), 42);
        // snow post: 8 blocks of snow somewhere above the terrain
        let mut snow_run = 0;
        for y in 0..40 {
            if world.get(30, y, 15) == 8 {
                snow_run += 1;
            }
        }
        assert_eq!(snow_run, 8);
    }
}
