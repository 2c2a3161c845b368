#![allow(clippy::expect_used, clippy::panic)]

//! Resolve and dump the build descriptor of a local installation.
//!
//! Usage:
//!   cargo run --example dump_build_descriptor -p coffer-storage -- /path/to/install

use std::env;

fn main() {
    let path = env::args()
        .nth(1)
        .expect("usage: dump_build_descriptor <install-path>");

    let descriptor =
        coffer_storage::open(&path).expect("failed to resolve build configuration");

    println!("Install root: {}", descriptor.install_root.display());
    println!("Data root:    {}", descriptor.data_root.display());
    println!("Index path:   {}", descriptor.index_path.display());
    println!();

    match descriptor.product {
        Some(product) => println!("Product:      {product:?}"),
        None => println!("Product:      -"),
    }
    println!("Build:        {}", descriptor.build_number);
    println!("Locale mask:  {:#x}", u32::from(descriptor.default_locale));
    println!("CDN URL:      {}", descriptor.cdn_url);
    println!();

    println!("CDN build key:  {}", descriptor.cdn_build_key);
    println!("CDN config key: {}", descriptor.cdn_config_key);
    println!("Archive group:  {}", descriptor.archive_group);
    println!("Archives ({}):", descriptor.archives.len());
    for archive in &descriptor.archives {
        println!("  - {archive}");
    }
    if !descriptor.patch_archives.is_empty() {
        println!("Patch archives ({}):", descriptor.patch_archives.len());
        for archive in &descriptor.patch_archives {
            println!("  - {archive}");
        }
    }
    println!();

    println!("Encoding key:  {}", descriptor.encoding_key);
    println!("Encoding ekey: {}", descriptor.encoding_ekey);
    for (name, key) in [
        ("Root", descriptor.root_key),
        ("Patch", descriptor.patch_key),
        ("Download", descriptor.download_key),
        ("Install", descriptor.install_key),
    ] {
        match key {
            Some(key) => println!("{name:<9} key: {key}"),
            None => println!("{name:<9} key: -"),
        }
    }
}
