// crates/rgbapack-cli/src/io/plane_file.rs

use std::path::Path;

use anyhow::Context;
use rgbapack_core::container;
use rgbapack_core::SeedPlane;

pub fn write_plane(path: &Path, plane: &SeedPlane) -> anyhow::Result<()> {
    container::write_container(path, plane)
        .with_context(|| format!("write seed plane: {}", path.display()))
}

pub fn read_plane(path: &Path) -> anyhow::Result<SeedPlane> {
    container::read_container(path).with_context(|| format!("read seed plane: {}", path.display()))
}
