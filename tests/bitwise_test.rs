use msa_emu::Engine;

const A: u128 = 0xFF00_FF00_FF00_FF00_F0F0_F0F0_F0F0_F0F0;
const B: u128 = 0x0F0F_0F0F_0F0F_0F0F_00FF_00FF_00FF_00FF;

#[test]
fn test_and_or_nor_xor() {
    let mut emu = Engine::default();
    emu.wr_write(1, A).unwrap();
    emu.wr_write(2, B).unwrap();

    emu.and_v(0, 1, 2).unwrap();
    assert_eq!(emu.wr_read(0).unwrap(), A & B);

    emu.or_v(0, 1, 2).unwrap();
    assert_eq!(emu.wr_read(0).unwrap(), A | B);

    emu.nor_v(0, 1, 2).unwrap();
    assert_eq!(emu.wr_read(0).unwrap(), !(A | B));

    emu.xor_v(0, 1, 2).unwrap();
    assert_eq!(emu.wr_read(0).unwrap(), A ^ B);
}

#[test]
fn test_bit_move_selects() {
    let mut emu = Engine::default();
    let d: u128 = 0x1234_5678_9ABC_DEF0_1234_5678_9ABC_DEF0;

    emu.wr_write(0, d).unwrap();
    emu.wr_write(1, A).unwrap();
    emu.wr_write(2, B).unwrap();
    emu.bmnz_v(0, 1, 2).unwrap();
    assert_eq!(emu.wr_read(0).unwrap(), (A & B) | (d & !B), "ws where wt set");

    emu.wr_write(0, d).unwrap();
    emu.bmz_v(0, 1, 2).unwrap();
    assert_eq!(emu.wr_read(0).unwrap(), (A & !B) | (d & B), "ws where wt clear");

    emu.wr_write(0, d).unwrap();
    emu.bsel_v(0, 1, 2).unwrap();
    assert_eq!(
        emu.wr_read(0).unwrap(),
        (A & !d) | (B & d),
        "wt where wd set, ws elsewhere"
    );
}
