#[cfg(test)]
mod tests {
    use binary_pack::{
        BigEndian, Codec, Compressed, Cursor, DeserializationError, ErrorKind, Exact, FixedString, Format,
        Integral, LittleEndian, NullPadding, Position, Sequence, SignedCompressed, SpacePadding, Varchar,
    };
    use proptest::prelude::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
    }

    type Packer = Format<(
        Integral<u16, BigEndian>,
        FixedString<2, SpacePadding>,
        Compressed,
        Varchar<Compressed>,
        Position,
    )>;

    #[test]
    fn it_works() {
        init_tracing();
        let packer = Packer::default();

        let packed = packer.pack(&(1, "a".to_string(), 300, "abc".to_string(), 0)).unwrap();
        assert_eq!(packed, vec![0x00, 0x01, b'a', b' ', 0xAC, 0x02, 0x03, b'a', b'b', b'c']);

        let (original, string, compressed, second, at) = packer.unpack(&packed).unwrap();
        assert_eq!(original, 1);
        assert_eq!(string, "a");
        assert_eq!(compressed, 300);
        assert_eq!(second, "abc");
        assert_eq!(at, packed.len());
    }

    #[test]
    fn scenario_mixed_record() {
        init_tracing();
        let format = Format::new((
            Integral::<u16, BigEndian>::new(),
            FixedString::<2, SpacePadding>::default(),
            Compressed::<u32, LittleEndian>::new(),
            Varchar::new(Integral::<u32, LittleEndian>::new()),
        ));
        let values = (1, "a".to_string(), 300, "abc".to_string());

        let packed = format.pack(&values).unwrap();
        assert_eq!(packed, [0x00, 0x01, 0x61, 0x20, 0xAC, 0x02, 0x03, 0x00, 0x00, 0x00, 0x61, 0x62, 0x63]);
        assert_eq!(format.unpack(&packed).unwrap(), values);
        assert_eq!(format.unpack_partial(&packed).unwrap().1, packed.len());
    }

    #[test]
    fn scenario_varint_zero() {
        let codec = Compressed::<u64>::new();
        let packed = codec.pack(&0).unwrap();
        assert_eq!(packed, [0x00]);
        assert_eq!(codec.unpack(&mut Cursor::new(&packed)).unwrap(), 0);
    }

    #[test]
    fn scenario_varint_three_hundred() {
        assert_eq!(Compressed::<u32, LittleEndian>::new().pack(&300).unwrap(), [0xAC, 0x02]);
        assert_eq!(Compressed::<u32, BigEndian>::new().pack(&300).unwrap(), [0x82, 0x2C]);
    }

    #[test]
    fn scenario_fixed_string_padding() {
        let codec = FixedString::<2, SpacePadding>::default();
        assert_eq!(codec.pack(&"a".to_string()).unwrap(), b"a ");
        assert_eq!(codec.unpack(&mut Cursor::new(b"a ")).unwrap(), "a");
    }

    #[test]
    fn scenario_short_integer_buffer() {
        let format = Format::new((Integral::<u16, BigEndian>::new(),));
        let err = format.unpack(&[0x01]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn scenario_overlong_u8_varint() {
        let format = Format::new((Compressed::<u8>::new(),));
        let err = format.unpack(&[0xAC, 0x02]).unwrap_err();
        assert_eq!(err, DeserializationError::Overlong("u8"));
        assert_eq!(err.to_string(), "compressed integer is too large for u8");
    }

    #[test]
    fn trailing_bytes_are_diagnosed() {
        init_tracing();
        let format = Format::new((Compressed::<u32>::new(), FixedString::<3, NullPadding>::default()));
        let err = format.unpack(&[0x05, b'x', 0, 0, 0xFF]).unwrap_err();
        assert_eq!(err, DeserializationError::IncompleteParse(4, 5));
        assert_eq!(err.kind(), ErrorKind::IncompleteParse);
        assert_eq!(err.to_string(), "incomplete parse: consumed 4 of 5 bytes");
    }

    #[test]
    fn prefix_of_a_larger_buffer() {
        let header = Format::new((Integral::<u32, BigEndian>::new(), Varchar::<Compressed<u16>>::default()));
        let mut buffer = header.pack(&(7, "id".to_string())).unwrap();
        buffer.extend_from_slice(b"payload");

        let ((kind, name), end) = header.unpack_partial(&buffer).unwrap();
        assert_eq!((kind, name.as_str()), (7, "id"));
        assert_eq!(&buffer[end..], b"payload");
    }

    #[test]
    fn exact_strings_and_signed_sequences() {
        let format = Format::new((
            FixedString::<4, Exact>::default(),
            Sequence::new(SignedCompressed::<i16, BigEndian>::new(), Integral::<u8, LittleEndian>::new()),
        ));
        let values = ("RIFF".to_string(), vec![-300, 0, 63, -64, i16::MIN]);
        let packed = format.pack(&values).unwrap();
        assert_eq!(&packed[..5], b"RIFF\x05");
        assert_eq!(format.unpack(&packed).unwrap(), values);

        let err = format.pack(&("RIF".to_string(), Vec::new())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    type Record = Format<(
        Integral<i32, LittleEndian>,
        SignedCompressed<i64, BigEndian>,
        FixedString<8, NullPadding>,
        Varchar<Integral<u16, BigEndian>>,
        Sequence<Compressed<u32>, Compressed<u8>>,
    )>;

    proptest! {
        #[test]
        fn record_roundtrips(
            a: i32,
            b: i64,
            c in "[a-zA-Z0-9 ]{0,7}[a-zA-Z0-9]?",
            d in ".{0,40}",
            e in proptest::collection::vec(any::<u32>(), 0..20),
        ) {
            let values = (a, b, c, d, e);
            let packed = Record::default().pack(&values).unwrap();
            prop_assert_eq!(Record::default().unpack(&packed).unwrap(), values);
        }

        #[test]
        fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            match Record::default().unpack_partial(&bytes) {
                Ok((_, end)) => prop_assert!(end <= bytes.len()),
                Err(err) => prop_assert_ne!(err.kind(), ErrorKind::InvalidInput),
            }
        }
    }
}
