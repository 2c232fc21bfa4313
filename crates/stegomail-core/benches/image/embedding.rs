use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use stegomail_core::{CodecOptions, StegoImageCodec};

fn carrier() -> RgbaImage {
    RgbaImage::from_fn(512, 512, |x, y| {
        let v = (64 + (x * 5 + y * 3) % 128) as u8;
        Rgba([v, v, v, 255])
    })
}

pub fn image_embedding(c: &mut Criterion) {
    c.bench_function("Image Embedding", |b| {
        let plain_image = carrier();
        let codec = StegoImageCodec::new(&CodecOptions::default()).expect("valid options");
        let secret_message = [0x5Au8; 300];

        b.iter(|| {
            codec
                .embed(black_box(&plain_image), &secret_message[..])
                .expect("Cannot embed secret message")
        })
    });
}

criterion_group!(benches, image_embedding);
criterion_main!(benches);
