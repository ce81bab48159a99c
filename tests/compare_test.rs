use msa_emu::{DataFormat, Engine};

fn from_bytes(b: [u8; 16]) -> u128 {
    u128::from_le_bytes(b)
}

fn from_words(w: [u32; 4]) -> u128 {
    let mut bytes = [0u8; 16];
    for (i, v) in w.iter().enumerate() {
        bytes[4 * i..4 * i + 4].copy_from_slice(&v.to_le_bytes());
    }
    u128::from_le_bytes(bytes)
}

#[test]
fn test_ceq_produces_lane_masks() {
    let mut emu = Engine::default();
    emu.wr_write(1, from_words([5, 6, 0, 0xFFFF_FFFF])).unwrap();
    emu.wr_write(2, from_words([5, 7, 0, 0xFFFF_FFFF])).unwrap();
    emu.ceq(DataFormat::Word, 0, 1, 2).unwrap();
    assert_eq!(
        emu.wr_read(0).unwrap(),
        from_words([0xFFFF_FFFF, 0, 0xFFFF_FFFF, 0xFFFF_FFFF]),
        "compare results are all-ones/all-zeros masks, never 0/1"
    );
}

#[test]
fn test_signed_vs_unsigned_ordering() {
    let mut emu = Engine::default();
    emu.wr_write(1, from_bytes([0xFF, 1, 0x80, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]))
        .unwrap();
    emu.wr_write(2, from_bytes([1, 0xFF, 0x7F, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]))
        .unwrap();

    emu.clt_s(DataFormat::Byte, 0, 1, 2).unwrap();
    let r = emu.wr_read(0).unwrap().to_le_bytes();
    assert_eq!(r[0], 0xFF, "-1 < 1 signed");
    assert_eq!(r[1], 0x00);
    assert_eq!(r[2], 0xFF, "-128 < 127 signed");
    assert_eq!(r[3], 0x00, "equal lanes are not less-than");

    emu.clt_u(DataFormat::Byte, 0, 1, 2).unwrap();
    let r = emu.wr_read(0).unwrap().to_le_bytes();
    assert_eq!(r[0], 0x00, "255 > 1 unsigned");
    assert_eq!(r[1], 0xFF);
    assert_eq!(r[2], 0x00);

    emu.cle_s(DataFormat::Byte, 0, 1, 2).unwrap();
    let r = emu.wr_read(0).unwrap().to_le_bytes();
    assert_eq!(r[3], 0xFF, "equal lanes satisfy less-than-or-equal");

    emu.cle_u(DataFormat::Byte, 0, 1, 2).unwrap();
    let r = emu.wr_read(0).unwrap().to_le_bytes();
    assert_eq!(r[0], 0x00);
    assert_eq!(r[3], 0xFF);
}

#[test]
fn test_compare_immediates() {
    let mut emu = Engine::default();
    emu.wr_write(1, from_bytes([0xFD, 3, 10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]))
        .unwrap();

    emu.ceqi(DataFormat::Byte, 0, 1, -3).unwrap();
    let r = emu.wr_read(0).unwrap().to_le_bytes();
    assert_eq!(r[0], 0xFF);
    assert_eq!(r[1], 0x00);

    emu.clti_s(DataFormat::Byte, 0, 1, 4).unwrap();
    let r = emu.wr_read(0).unwrap().to_le_bytes();
    assert_eq!(r[0], 0xFF, "-3 < 4");
    assert_eq!(r[1], 0xFF);
    assert_eq!(r[2], 0x00);

    emu.clti_u(DataFormat::Byte, 0, 1, 4).unwrap();
    let r = emu.wr_read(0).unwrap().to_le_bytes();
    assert_eq!(r[0], 0x00, "0xFD is large unsigned");
    assert_eq!(r[1], 0xFF);

    emu.clei_s(DataFormat::Byte, 0, 1, 10).unwrap();
    let r = emu.wr_read(0).unwrap().to_le_bytes();
    assert_eq!(r[2], 0xFF);

    emu.clei_u(DataFormat::Byte, 0, 1, 3).unwrap();
    let r = emu.wr_read(0).unwrap().to_le_bytes();
    assert_eq!(r[1], 0xFF);
    assert_eq!(r[2], 0x00);
}
