use msa_emu::{DataFormat, EmulatorError, Engine};

fn from_halves(h: [u16; 8]) -> u128 {
    let mut bytes = [0u8; 16];
    for (i, v) in h.iter().enumerate() {
        bytes[2 * i..2 * i + 2].copy_from_slice(&v.to_le_bytes());
    }
    u128::from_le_bytes(bytes)
}

fn from_words(w: [u32; 4]) -> u128 {
    let mut bytes = [0u8; 16];
    for (i, v) in w.iter().enumerate() {
        bytes[4 * i..4 * i + 4].copy_from_slice(&v.to_le_bytes());
    }
    u128::from_le_bytes(bytes)
}

#[test]
fn test_mulv_wraps() {
    let mut emu = Engine::default();
    emu.wr_write(1, from_halves([3, 0x4000, 0xFFFF, 0, 0, 0, 0, 0]))
        .unwrap();
    emu.wr_write(2, from_halves([7, 4, 5, 0, 0, 0, 0, 0])).unwrap();
    emu.mulv(DataFormat::Half, 0, 1, 2).unwrap();
    let r = emu.wr_read(0).unwrap();
    // 0x4000 * 4 = 0x10000 wraps to 0; -1 * 5 = -5
    assert_eq!(r, from_halves([21, 0, 0xFFFB, 0, 0, 0, 0, 0]));
}

#[test]
fn test_maddv_msubv_accumulate() {
    let mut emu = Engine::default();
    emu.wr_write(0, from_halves([100, 100, 0, 0, 0, 0, 0, 0])).unwrap();
    emu.wr_write(1, from_halves([3, 5, 0, 0, 0, 0, 0, 0])).unwrap();
    emu.wr_write(2, from_halves([4, 0xFFFF, 0, 0, 0, 0, 0, 0]))
        .unwrap();
    emu.maddv(DataFormat::Half, 0, 1, 2).unwrap();
    // 100 + 3*4, 100 + 5*(-1)
    assert_eq!(
        emu.wr_read(0).unwrap(),
        from_halves([112, 95, 0, 0, 0, 0, 0, 0])
    );
    emu.msubv(DataFormat::Half, 0, 1, 2).unwrap();
    assert_eq!(
        emu.wr_read(0).unwrap(),
        from_halves([100, 100, 0, 0, 0, 0, 0, 0])
    );
}

#[test]
fn test_dotp_signed_sublanes() {
    let mut emu = Engine::default();
    // half lanes holding byte pairs: lane0 = even 2, odd 1; lane1 = even -1, odd 3
    emu.wr_write(1, from_halves([0x0102, 0x03FF, 0, 0, 0, 0, 0, 0]))
        .unwrap();
    emu.wr_write(2, from_halves([0x0304, 0x0502, 0, 0, 0, 0, 0, 0]))
        .unwrap();
    emu.dotp_s(DataFormat::Half, 0, 1, 2).unwrap();
    let r = emu.wr_read(0).unwrap();
    // lane0: 2*4 + 1*3 = 11; lane1: (-1)*2 + 3*5 = 13
    assert_eq!(r, from_halves([11, 13, 0, 0, 0, 0, 0, 0]));
}

#[test]
fn test_dotp_unsigned_sublanes() {
    let mut emu = Engine::default();
    emu.wr_write(1, from_halves([0xFFFF, 0, 0, 0, 0, 0, 0, 0]))
        .unwrap();
    emu.wr_write(2, from_halves([0x0101, 0, 0, 0, 0, 0, 0, 0]))
        .unwrap();
    emu.dotp_u(DataFormat::Half, 0, 1, 2).unwrap();
    // 255*1 + 255*1 = 510
    assert_eq!(emu.wr_read(0).unwrap(), from_halves([510, 0, 0, 0, 0, 0, 0, 0]));
}

#[test]
fn test_dpadd_dpsub() {
    let mut emu = Engine::default();
    emu.wr_write(0, from_words([1000, 0, 0, 0])).unwrap();
    emu.wr_write(1, from_words([0x0002_0003, 0, 0, 0])).unwrap(); // odd 2, even 3
    emu.wr_write(2, from_words([0x0004_0005, 0, 0, 0])).unwrap(); // odd 4, even 5
    emu.dpadd_s(DataFormat::Word, 0, 1, 2).unwrap();
    // 1000 + (3*5 + 2*4) = 1023
    assert_eq!(emu.wr_read(0).unwrap(), from_words([1023, 0, 0, 0]));
    emu.dpsub_s(DataFormat::Word, 0, 1, 2).unwrap();
    assert_eq!(emu.wr_read(0).unwrap(), from_words([1000, 0, 0, 0]));
}

#[test]
fn test_hadd_hsub() {
    let mut emu = Engine::default();
    emu.wr_write(1, from_halves([0xFF02, 0x0102, 0, 0, 0, 0, 0, 0]))
        .unwrap(); // odd sub-lanes: -1, 1
    emu.wr_write(2, from_halves([0x0004, 0x0005, 0, 0, 0, 0, 0, 0]))
        .unwrap(); // even sub-lanes: 4, 5
    emu.hadd_s(DataFormat::Half, 0, 1, 2).unwrap();
    assert_eq!(
        emu.wr_read(0).unwrap(),
        from_halves([3, 6, 0, 0, 0, 0, 0, 0])
    );
    emu.hsub_s(DataFormat::Half, 0, 1, 2).unwrap();
    assert_eq!(
        emu.wr_read(0).unwrap(),
        from_halves([(-5i16) as u16, (-4i16) as u16, 0, 0, 0, 0, 0, 0])
    );
    emu.hadd_u(DataFormat::Half, 0, 1, 2).unwrap();
    // odd sub-lane of 0xFF02 zero-extends to 255
    assert_eq!(
        emu.wr_read(0).unwrap(),
        from_halves([259, 6, 0, 0, 0, 0, 0, 0])
    );
}

#[test]
fn test_sublane_ops_reject_byte_format() {
    let mut emu = Engine::default();
    for r in [
        emu.dotp_s(DataFormat::Byte, 0, 1, 2),
        emu.dotp_u(DataFormat::Byte, 0, 1, 2),
        emu.dpadd_s(DataFormat::Byte, 0, 1, 2),
        emu.dpsub_u(DataFormat::Byte, 0, 1, 2),
        emu.hadd_s(DataFormat::Byte, 0, 1, 2),
        emu.hsub_u(DataFormat::Byte, 0, 1, 2),
    ] {
        assert_eq!(r, Err(EmulatorError::InvalidOperand));
    }
}
