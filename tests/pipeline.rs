use kmeans_bmp::{Image, KMeansConfig, Rgb, bmp, checksum, kmeans};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("kmeans_bmp_it_{}_{}.bmp", name, std::process::id()))
}

/// 5x4 gradient image as BMP bytes
fn gradient_bmp() -> Vec<u8> {
    let (width, height) = (5u32, 4u32);
    let stride = (width * 3 + 3) & !3;
    let data_len = stride * height;

    let mut buf = Vec::new();
    buf.extend_from_slice(b"BM");
    buf.extend_from_slice(&(54 + data_len).to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());
    buf.extend_from_slice(&54u32.to_le_bytes());
    buf.extend_from_slice(&40u32.to_le_bytes());
    buf.extend_from_slice(&width.to_le_bytes());
    buf.extend_from_slice(&height.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&24u16.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());
    buf.extend_from_slice(&data_len.to_le_bytes());
    buf.extend_from_slice(&[0u8; 16]);

    for y in 0..height {
        for x in 0..width {
            let r = (x * 60) as u8;
            let g = (y * 80) as u8;
            let b = ((x + y) * 25) as u8;
            buf.extend_from_slice(&[b, g, r]);
        }
        buf.extend_from_slice(&vec![0u8; (stride - width * 3) as usize]);
    }
    buf
}

#[test]
fn test_quantize_file_end_to_end() {
    let input = temp_path("input");
    let output = temp_path("output");
    let source = gradient_bmp();
    fs::write(&input, &source).unwrap();

    let image = bmp::load(&input).unwrap();
    assert_eq!(image.pixel_count(), 20);

    let result = kmeans(&image.pixels, &KMeansConfig::new(4)).unwrap();
    bmp::save(&output, &image, &result.centroids).unwrap();

    let written = fs::read(&output).unwrap();
    fs::remove_file(&input).unwrap();
    fs::remove_file(&output).unwrap();

    assert_eq!(written.len(), source.len());
    assert_eq!(written[..54], source[..54]);

    let palette: HashSet<Rgb> = result.centroids.iter().map(|c| c.color).collect();
    let recolored = Image::decode(&written).unwrap();
    assert!(recolored.pixels.iter().all(|px| palette.contains(px)));

    let distinct: HashSet<Rgb> = recolored.pixels.iter().copied().collect();
    assert!(distinct.len() <= 4);
}

#[test]
fn test_checksum_reproducible_across_runs() {
    let image = Image::decode(&gradient_bmp()).unwrap();
    let config = KMeansConfig::new(3);

    let first = kmeans(&image.pixels, &config).unwrap();
    let second = kmeans(&image.pixels, &config).unwrap();

    assert_eq!(first.centroids, second.centroids);
    assert_eq!(checksum(&first.centroids), checksum(&second.centroids));
}
