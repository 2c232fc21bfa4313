use bitstream_io::{BigEndian, BitRead, BitReader};

use stegomail_core::bit_stream::{from_bits, to_bits};
use stegomail_core::{BitStream, StegoError};

#[test]
fn should_return_the_bits_of_h_msb_first() {
    let b = [0b0100_1000];
    let bits = to_bits(Some(&b[..])).unwrap();

    assert_eq!(bits.get(0), Some(0), "1st bit not correct");
    assert_eq!(bits.get(1), Some(1), "2nd bit not correct");
    assert_eq!(bits.get(2), Some(0), "3rd bit not correct");
    assert_eq!(bits.get(3), Some(0), "4th bit not correct");
    assert_eq!(bits.get(4), Some(1), "5th bit not correct");
    assert_eq!(bits.get(5), Some(0), "6th bit not correct");
    assert_eq!(bits.get(6), Some(0), "7th bit not correct");
    assert_eq!(bits.get(7), Some(0), "8th bit not correct");
    assert_eq!(bits.get(8), None, "it should end after the last bit");
}

#[test]
fn should_behave_as_the_bit_reader() {
    let b = [0b0100_1000, 0b0110_0001, 0xFF, 0x00];
    let bits = BitStream::from_bytes(&b);
    let mut reader = BitReader::endian(&b[..], BigEndian);

    for (i, bit) in bits.iter().enumerate() {
        assert_eq!(
            bit,
            u8::from(reader.read_bit().unwrap()),
            "{i} bit not correct"
        );
    }
    assert_eq!(bits.len(), 32);
}

#[test]
fn should_tell_absent_from_empty_input() {
    assert!(matches!(to_bits(None), Err(StegoError::NilInput)));

    let empty = to_bits(Some(&[][..])).unwrap();
    assert!(empty.is_empty());
    assert_eq!(from_bits(&empty).unwrap(), Vec::<u8>::new());
}

#[test]
fn should_pack_bits_back_into_the_same_bytes() {
    let message = "Hello, stegomail!".as_bytes();

    let bits = to_bits(Some(message)).unwrap();

    assert_eq!(bits.len(), message.len() * 8);
    assert_eq!(from_bits(&bits).unwrap(), message);
}

#[test]
fn should_refuse_a_dangling_partial_byte() {
    let bits = BitStream::from_bits([1, 0, 1, 1, 0, 0, 1, 0, 1]);

    assert!(matches!(
        from_bits(&bits),
        Err(StegoError::IncompleteBitStream { bits: 9 })
    ));
}
