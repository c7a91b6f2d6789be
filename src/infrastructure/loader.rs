// SPDX-License-Identifier: MPL-2.0
//! Filesystem image loader.
//!
//! Reads image properties with the `image` crate and reads EXIF with
//! [`exif_reader`](super::exif_reader) for containers that can carry it.

use super::exif_reader::read_raw_exif;
use crate::application::port::ImageLoader;
use crate::domain::media::{DecodedImage, ImageProperties};
use crate::error::{Error, Result};
use image_rs::codecs::gif::GifDecoder;
use image_rs::codecs::png::PngDecoder;
use image_rs::codecs::webp::WebPDecoder;
use image_rs::{AnimationDecoder, ColorType, ImageDecoder, ImageFormat, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// [`ImageLoader`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageLoader;

impl ImageLoader for FileImageLoader {
    fn load(&self, path: &Path) -> Result<DecodedImage> {
        let (format, properties) = inspect(path)?;

        let exif = if can_carry_exif(format) {
            let mut reader = BufReader::new(File::open(path)?);
            read_raw_exif(&mut reader)
        } else {
            None
        };

        Ok(DecodedImage::new(properties, exif))
    }
}

/// Containers `kamadak-exif` can read EXIF from.
fn can_carry_exif(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Jpeg | ImageFormat::Tiff | ImageFormat::Png | ImageFormat::WebP
    )
}

/// Reads format, dimensions, pixel mode and frame count of an image file.
///
/// The format is detected from the file content, not its extension.
fn inspect(path: &Path) -> Result<(ImageFormat, ImageProperties)> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader
        .format()
        .ok_or_else(|| Error::Decode("Unrecognized image format".to_string()))?;
    let decoder = reader.into_decoder()?;
    let (width, height) = decoder.dimensions();
    let mode = mode_name(decoder.color_type());

    let frame_count = count_frames(path, format).unwrap_or_else(|err| {
        eprintln!(
            "[WARN] Failed to count frames of {}: {err}. Assuming a still image.",
            path.display()
        );
        1
    });

    let properties =
        ImageProperties::still(width, height, format_name(format), mode).with_frames(frame_count);
    Ok((format, properties))
}

/// Upper-case container name for display.
#[must_use]
pub fn format_name(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "JPEG".to_string(),
        ImageFormat::Png => "PNG".to_string(),
        ImageFormat::Gif => "GIF".to_string(),
        ImageFormat::WebP => "WEBP".to_string(),
        ImageFormat::Tiff => "TIFF".to_string(),
        ImageFormat::Bmp => "BMP".to_string(),
        ImageFormat::Ico => "ICO".to_string(),
        other => format!("{other:?}").to_uppercase(),
    }
}

/// Pixel layout name in the usual imaging vocabulary.
#[must_use]
pub fn mode_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "I;16",
        ColorType::La16 => "LA;16",
        ColorType::Rgb16 => "RGB;16",
        ColorType::Rgba16 => "RGBA;16",
        ColorType::Rgb32F => "RGB;F",
        ColorType::Rgba32F => "RGBA;F",
        _ => "UNKNOWN",
    }
}

/// Counts animation frames; still images and formats without animation
/// support report one frame.
fn count_frames(path: &Path, format: ImageFormat) -> Result<usize> {
    let open = || -> Result<BufReader<File>> { Ok(BufReader::new(File::open(path)?)) };

    let count = match format {
        ImageFormat::Gif => GifDecoder::new(open()?)?.into_frames().count(),
        ImageFormat::WebP => {
            let decoder = WebPDecoder::new(open()?)?;
            if decoder.has_animation() {
                decoder.into_frames().count()
            } else {
                1
            }
        }
        ImageFormat::Png => {
            let decoder = PngDecoder::new(open()?)?;
            if decoder.is_apng()? {
                decoder.apng()?.into_frames().count()
            } else {
                1
            }
        }
        _ => 1,
    };
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::codecs::gif::GifEncoder;
    use image_rs::{Delay, Frame, Rgba, RgbaImage, RgbImage};
    use img_parts::png::{Png, PngChunk};
    use img_parts::Bytes;
    use tempfile::tempdir;

    #[test]
    fn reads_png_properties_without_exif() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("plain.png");
        RgbImage::new(4, 3).save(&path).expect("save png");

        let image = FileImageLoader.load(&path).expect("load png");
        assert_eq!(image.properties.width, 4);
        assert_eq!(image.properties.height, 3);
        assert_eq!(image.properties.format, "PNG");
        assert_eq!(image.properties.mode, "RGB");
        assert!(!image.properties.is_animated);
        assert_eq!(image.properties.frame_count, 1);
        assert!(image.exif.is_none());
    }

    #[test]
    fn detects_format_from_content() {
        let dir = tempdir().expect("temp dir");
        let png_path = dir.path().join("gray.png");
        image_rs::GrayImage::new(2, 2).save(&png_path).expect("save png");

        let disguised = dir.path().join("gray.jpg");
        std::fs::copy(&png_path, &disguised).expect("copy");

        let (_, props) = inspect(&disguised).expect("inspect");
        assert_eq!(props.format, "PNG");
        assert_eq!(props.mode, "L");
    }

    const WIDTH: u32 = 6;
    const HEIGHT: u32 = 4;

    fn write_gif(path: &Path, frame_count: u8) {
        let file = File::create(path).expect("create gif");
        let mut encoder = GifEncoder::new(file);
        let frames = (0..frame_count).map(|shade| {
            Frame::from_parts(
                RgbaImage::from_pixel(5, 5, Rgba([shade.wrapping_mul(80), 0, 0, 255])),
                0,
                0,
                Delay::from_numer_denom_ms(100, 1),
            )
        });
        encoder.encode_frames(frames).expect("encode gif");
    }

    #[test]
    fn counts_gif_frames() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("anim.gif");
        write_gif(&path, 3);

        let (format, props) = inspect(&path).expect("inspect gif");
        assert_eq!(format, ImageFormat::Gif);
        assert_eq!(props.format, "GIF");
        assert_eq!(props.frame_count, 3);
        assert!(props.is_animated);
    }

    #[test]
    fn gif_loads_without_exif() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("still.gif");
        write_gif(&path, 1);

        let image = FileImageLoader.load(&path).expect("load gif");
        assert!(image.exif.is_none());
        assert!(!image.properties.is_animated);
        assert_eq!(image.properties.frame_count, 1);
    }

    #[test]
    fn exif_containers() {
        assert!(can_carry_exif(ImageFormat::Jpeg));
        assert!(can_carry_exif(ImageFormat::Tiff));
        assert!(can_carry_exif(ImageFormat::Png));
        assert!(can_carry_exif(ImageFormat::WebP));
        assert!(!can_carry_exif(ImageFormat::Gif));
        assert!(!can_carry_exif(ImageFormat::Bmp));
        assert!(!can_carry_exif(ImageFormat::Ico));
    }

    fn riff_chunk(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let size = u32::try_from(payload.len()).expect("chunk size");
        let mut chunk = Vec::with_capacity(payload.len() + 9);
        chunk.extend_from_slice(id);
        chunk.extend_from_slice(&size.to_le_bytes());
        chunk.extend_from_slice(payload);
        if payload.len() % 2 == 1 {
            chunk.push(0);
        }
        chunk
    }

    fn u24(value: u32) -> [u8; 3] {
        let bytes = value.to_le_bytes();
        [bytes[0], bytes[1], bytes[2]]
    }

    /// Lossless bitstream of a still WebP written by the `image` encoder.
    fn vp8l_bitstream(dir: &Path, shade: u8) -> Vec<u8> {
        let path = dir.join(format!("still-{shade}.webp"));
        RgbaImage::from_pixel(WIDTH, HEIGHT, Rgba([shade, 0, 0, 255]))
            .save(&path)
            .expect("save webp");
        let bytes = std::fs::read(&path).expect("read webp");
        assert_eq!(&bytes[12..16], b"VP8L");
        let size = u32::from_le_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]) as usize;
        bytes[20..20 + size].to_vec()
    }

    /// Extended WebP: VP8X, ICCP, ANIM, then one ANMF per bitstream.
    fn write_animated_webp(path: &Path, bitstreams: &[Vec<u8>], icc_len: usize) {
        // ICC profile, alpha and animation flags.
        let mut vp8x = vec![0x32, 0, 0, 0];
        vp8x.extend_from_slice(&u24(WIDTH - 1));
        vp8x.extend_from_slice(&u24(HEIGHT - 1));

        let mut body = b"WEBP".to_vec();
        body.extend(riff_chunk(b"VP8X", &vp8x));
        body.extend(riff_chunk(b"ICCP", &vec![0; icc_len]));
        body.extend(riff_chunk(b"ANIM", &[0, 0, 0, 0, 0, 0]));
        for bitstream in bitstreams {
            let mut anmf = Vec::new();
            anmf.extend_from_slice(&u24(0));
            anmf.extend_from_slice(&u24(0));
            anmf.extend_from_slice(&u24(WIDTH - 1));
            anmf.extend_from_slice(&u24(HEIGHT - 1));
            anmf.extend_from_slice(&u24(100));
            anmf.push(0x02);
            anmf.extend(riff_chunk(b"VP8L", bitstream));
            body.extend(riff_chunk(b"ANMF", &anmf));
        }

        std::fs::write(path, riff_chunk(b"RIFF", &body)).expect("write webp");
    }

    #[test]
    fn counts_webp_frames_behind_large_icc_profile() {
        let dir = tempdir().expect("temp dir");
        let bitstreams = vec![
            vp8l_bitstream(dir.path(), 40),
            vp8l_bitstream(dir.path(), 200),
        ];
        let path = dir.path().join("anim.webp");
        write_animated_webp(&path, &bitstreams, 1200);

        let (format, props) = inspect(&path).expect("inspect webp");
        assert_eq!(format, ImageFormat::WebP);
        assert_eq!((props.width, props.height), (WIDTH, HEIGHT));
        assert_eq!(props.frame_count, 2);
        assert!(props.is_animated);
    }

    #[test]
    fn still_webp_is_single_frame() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("still.webp");
        RgbaImage::from_pixel(WIDTH, HEIGHT, Rgba([9, 9, 9, 255]))
            .save(&path)
            .expect("save webp");

        let image = FileImageLoader.load(&path).expect("load webp");
        assert_eq!(image.properties.format, "WEBP");
        assert_eq!(image.properties.frame_count, 1);
        assert!(!image.properties.is_animated);
        assert!(image.exif.is_none());
    }

    fn frame_control(sequence: u32) -> PngChunk {
        let mut data = Vec::with_capacity(26);
        data.extend_from_slice(&sequence.to_be_bytes());
        data.extend_from_slice(&WIDTH.to_be_bytes());
        data.extend_from_slice(&HEIGHT.to_be_bytes());
        data.extend_from_slice(&0u32.to_be_bytes());
        data.extend_from_slice(&0u32.to_be_bytes());
        data.extend_from_slice(&1u16.to_be_bytes());
        data.extend_from_slice(&10u16.to_be_bytes());
        data.extend_from_slice(&[0, 0]);
        PngChunk::new(*b"fcTL", Bytes::from(data))
    }

    /// Turns a still PNG into an APNG whose frames all reuse its pixel data.
    fn write_apng(dir: &Path, name: &str, frame_count: u32) -> std::path::PathBuf {
        let still = dir.join(format!("{name}.still.png"));
        RgbaImage::from_pixel(WIDTH, HEIGHT, Rgba([0, 90, 0, 255]))
            .save(&still)
            .expect("save png");
        let mut png =
            Png::from_bytes(std::fs::read(&still).expect("read png").into()).expect("parse png");

        let pixels: Vec<u8> = png
            .chunks()
            .iter()
            .filter(|chunk| chunk.kind() == *b"IDAT")
            .flat_map(|chunk| chunk.contents().to_vec())
            .collect();

        let chunks = png.chunks_mut();
        let first_idat = chunks
            .iter()
            .position(|chunk| chunk.kind() == *b"IDAT")
            .expect("IDAT chunk");
        let mut animation = Vec::with_capacity(8);
        animation.extend_from_slice(&frame_count.to_be_bytes());
        animation.extend_from_slice(&0u32.to_be_bytes());
        chunks.insert(first_idat, frame_control(0));
        chunks.insert(first_idat, PngChunk::new(*b"acTL", Bytes::from(animation)));

        let end = chunks.len() - 1;
        let mut trailing = Vec::new();
        for frame in 1..frame_count {
            let sequence = frame * 2 - 1;
            let mut data = (sequence + 1).to_be_bytes().to_vec();
            data.extend_from_slice(&pixels);
            trailing.push(frame_control(sequence));
            trailing.push(PngChunk::new(*b"fdAT", Bytes::from(data)));
        }
        chunks.splice(end..end, trailing);

        let mut output = Vec::new();
        png.encoder().write_to(&mut output).expect("encode apng");
        let path = dir.join(name);
        std::fs::write(&path, output).expect("write apng");
        path
    }

    #[test]
    fn counts_apng_frames() {
        let dir = tempdir().expect("temp dir");
        let path = write_apng(dir.path(), "anim.png", 3);

        let (format, props) = inspect(&path).expect("inspect apng");
        assert_eq!(format, ImageFormat::Png);
        assert_eq!(props.frame_count, 3);
        assert!(props.is_animated);
    }

    #[test]
    fn single_frame_apng_is_still() {
        let dir = tempdir().expect("temp dir");
        let path = write_apng(dir.path(), "one.png", 1);

        let (_, props) = inspect(&path).expect("inspect apng");
        assert_eq!(props.frame_count, 1);
        assert!(!props.is_animated);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = FileImageLoader.load(Path::new("/nonexistent/path/image.jpg"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn non_image_is_decode_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "not an image").expect("write");

        let result = FileImageLoader.load(&path);
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn mode_names() {
        assert_eq!(mode_name(ColorType::Rgba8), "RGBA");
        assert_eq!(mode_name(ColorType::La8), "LA");
        assert_eq!(mode_name(ColorType::L16), "I;16");
    }

    #[test]
    fn format_names() {
        assert_eq!(format_name(ImageFormat::Jpeg), "JPEG");
        assert_eq!(format_name(ImageFormat::WebP), "WEBP");
        assert_eq!(format_name(ImageFormat::Qoi), "QOI");
    }
}
