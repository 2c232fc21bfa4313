use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use stegomail_core::{CodecOptions, StegoImageCodec};

pub fn image_extraction(c: &mut Criterion) {
    c.bench_function("Image Extraction", |b| {
        let codec = StegoImageCodec::new(&CodecOptions::default()).expect("valid options");
        let plain_image = RgbaImage::from_fn(512, 512, |x, y| {
            let v = (64 + (x * 5 + y * 3) % 128) as u8;
            Rgba([v, v, v, 255])
        });
        let secret_image = codec
            .embed(&plain_image, &[0x5Au8; 300])
            .expect("Cannot embed secret message");

        b.iter(|| {
            codec
                .extract(black_box(&secret_image), 300 * 8)
                .expect("Failed to extract 300 bytes")
        })
    });
}

criterion_group!(benches, image_extraction);
criterion_main!(benches);
