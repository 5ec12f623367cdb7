use proptest::prelude::*;
use scalar::{WireReader, WireWriter};

#[derive(Clone, Debug)]
enum Op {
    U8(u8),
    U16(u16),
    U32(u32),
    F32(f32),
    F64(f64),
    Zeros(usize),
}

impl Op {
    fn len(&self) -> usize {
        match self {
            Self::U8(_) => 1,
            Self::U16(_) => 2,
            Self::U32(_) | Self::F32(_) => 4,
            Self::F64(_) => 8,
            Self::Zeros(n) => *n,
        }
    }
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::U8),
        any::<u16>().prop_map(Op::U16),
        any::<u32>().prop_map(Op::U32),
        any::<f32>().prop_map(Op::F32),
        any::<f64>().prop_map(Op::F64),
        (0usize..16).prop_map(Op::Zeros),
    ]
}

proptest! {
    #[test]
    fn prop_roundtrip_ops(ops in prop::collection::vec(op_strategy(), 1..48)) {
        let total: usize = ops.iter().map(Op::len).sum();
        let mut buf = vec![0u8; total];

        let mut writer = WireWriter::new(&mut buf);
        for op in &ops {
            match op {
                Op::U8(v) => writer.write_u8(*v).unwrap(),
                Op::U16(v) => writer.write_u16(*v).unwrap(),
                Op::U32(v) => writer.write_u32(*v).unwrap(),
                Op::F32(v) => writer.write_f32(*v).unwrap(),
                Op::F64(v) => writer.write_f64(*v).unwrap(),
                Op::Zeros(n) => writer.write_zeros(*n).unwrap(),
            }
        }
        prop_assert_eq!(writer.finish(), total);

        let mut reader = WireReader::new(&buf);
        for op in &ops {
            match op {
                Op::U8(v) => prop_assert_eq!(reader.read_u8().unwrap(), *v),
                Op::U16(v) => prop_assert_eq!(reader.read_u16().unwrap(), *v),
                Op::U32(v) => prop_assert_eq!(reader.read_u32().unwrap(), *v),
                Op::F32(v) => {
                    let read = reader.read_f32().unwrap();
                    prop_assert_eq!(read.to_bits(), v.to_bits());
                }
                Op::F64(v) => {
                    let read = reader.read_f64().unwrap();
                    prop_assert_eq!(read.to_bits(), v.to_bits());
                }
                Op::Zeros(n) => {
                    let bytes = reader.read_bytes(*n).unwrap();
                    prop_assert!(bytes.iter().all(|&b| b == 0));
                }
            }
        }
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_u32_image_is_big_endian(value in any::<u32>()) {
        let mut buf = [0u8; 4];
        let mut writer = WireWriter::new(&mut buf);
        writer.write_u32(value).unwrap();
        writer.finish();
        prop_assert_eq!(buf, value.to_be_bytes());
    }
}
