//! # Memory Dump Tests

use pretty_assertions::assert_eq;
use shpipe_core::common::data::Lanes;
use shpipe_core::sim::dump::{dump_memory, render_word};
use shpipe_core::soc::{DataBus, Memory};

#[test]
fn test_dump_format() {
    let mut memory = Memory::new(2, 2);
    memory.poke(0x0, 0x0000_0001);
    memory.write(0xC, Lanes(0b1000), 0xA500_0000);

    let expected = "\
-- block 0
00000000000000000000000000000000      0 00000000000000000000000000000001
00000000000000000000000000000100      1 UUUUUUUUUUUUUUUUUUUUUUUUUUUUUUUU
-- block 1
00000000000000000000000000001000      2 UUUUUUUUUUUUUUUUUUUUUUUUUUUUUUUU
00000000000000000000000000001100      3 10100101UUUUUUUUUUUUUUUUUUUUUUUU
";
    assert_eq!(dump_memory(&memory), expected);
}

#[test]
fn test_render_word_marks_undefined_lanes() {
    assert_eq!(
        render_word(0xFFFF_FFFF, Lanes(0b0101)),
        "UUUUUUUU11111111UUUUUUUU11111111"
    );
}

#[test]
fn test_dump_is_deterministic() {
    let mut a = Memory::new(1, 8);
    let mut b = Memory::new(1, 8);
    for memory in [&mut a, &mut b] {
        memory.poke(8, 0x1234_5678);
    }
    assert_eq!(dump_memory(&a), dump_memory(&b));
}
