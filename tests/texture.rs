use std::fs;

use image::{Rgb, RgbImage};

use glium_cubes::texture::{self, container_image, face_image};
use glium_cubes::{Builtin, TextureError, TextureSource};

mod support;

#[test]
fn raw_images_start_with_the_bottom_row() {
    let mut image = RgbImage::new(1, 2);
    image.put_pixel(0, 0, Rgb([255, 0, 0]));
    image.put_pixel(0, 1, Rgb([0, 0, 255]));

    let raw = texture::to_raw(image);
    assert_eq!((raw.width, raw.height), (1, 2));
    assert_eq!(&raw.data[..], &[0, 0, 255, 255, 0, 0]);
}

#[test]
fn builtin_container() {
    let image = container_image(64);
    assert_eq!(image.dimensions(), (64, 64));
    // the frame
    assert_eq!(*image.get_pixel(0, 0), Rgb([120, 120, 110]));
    assert_eq!(*image.get_pixel(63, 32), Rgb([120, 120, 110]));
}

#[test]
fn builtin_face() {
    let image = face_image(128);
    assert_eq!(*image.get_pixel(0, 0), Rgb([0, 0, 0]));
    assert_eq!(*image.get_pixel(64, 64), Rgb([250, 210, 30]));
    // left eye
    assert_eq!(*image.get_pixel(43, 48), Rgb([60, 30, 0]));
}

#[test]
fn load_from_file() {
    let path = support::temp_path("gradient.png");
    let image = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8 * 100, y as u8 * 100, 7]));
    image.save(&path).unwrap();

    let loaded = TextureSource::File(path.clone()).load();
    fs::remove_file(&path).unwrap();

    let loaded = loaded.unwrap();
    assert_eq!(loaded.dimensions(), (3, 2));
    assert_eq!(*loaded.get_pixel(2, 1), Rgb([200, 100, 7]));
}

#[test]
fn missing_file() {
    let path = support::temp_path("does-not-exist.png");
    match TextureSource::File(path.clone()).load() {
        Err(TextureError::Decode { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected result: {:?}", other.map(|image| image.dimensions())),
    }
}

#[test]
fn builtins_ignore_the_filesystem() {
    let image = TextureSource::Builtin(Builtin::Container).load().unwrap();
    assert_eq!(image, container_image(texture::BUILTIN_SIZE));
}
