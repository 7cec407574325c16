use anyhow::Result;
use wirestream::prelude::*;

#[test]
fn writes_land_where_reads_find_them() -> Result<()> {
    let mut bout = OutputBitStream::new([0u8; 2]);
    bout.write(0b10, 2)
        .write(0, 1)
        .write(0, 1)
        .write(0b0000, 4)
        .write(0, 1)
        .write(8, 7);
    assert!(bout.ok());
    assert_eq!(bout.buf().data(), &[0x80, 0x08]);
    Ok(())
}

#[test]
fn zero_width_write_is_a_no_op() -> Result<()> {
    let mut bout = OutputBitStream::new([0xffu8]);
    bout.write(0, 0);
    assert_eq!(bout.tell(), 0);
    assert!(bout.good());
    assert_eq!(bout.buf().data(), &[0xff]);
    Ok(())
}

#[test]
fn untouched_bits_survive_a_write() -> Result<()> {
    let mut bout = OutputBitStream::new([0xffu8, 0xff, 0xff, 0xff]);
    bout.seek_to(7);
    bout.write(0, 17);
    assert!(bout.good());
    assert_eq!(bout.buf().data(), &[0xfe, 0x00, 0x00, 0xff]);
    Ok(())
}

#[test]
fn value_is_truncated_to_the_field_width() -> Result<()> {
    let mut bout = OutputBitStream::new([0u8; 2]);
    bout.write(u64::MAX, 5);
    assert_eq!(bout.buf().data(), &[0b1111_1000, 0]);
    Ok(())
}

#[test]
fn exact_fill_sets_eof_but_not_fail() -> Result<()> {
    let mut bout = OutputBitStream::new([0u8; 2]);
    bout.write(0xabcd, 16);
    assert!(bout.eof() && !bout.fail());
    assert!(bout.ok());
    assert_eq!(bout.buf().data(), &[0xab, 0xcd]);
    Ok(())
}

#[test]
fn overrun_writes_nothing() -> Result<()> {
    let mut bout = OutputBitStream::new([0u8; 2]);
    bout.write(0xff, 8);
    bout.write(0x1ff, 9);
    assert!(bout.eof() && bout.fail() && !bout.bad());
    assert_eq!(bout.tell(), 8);
    // the second field was not partially deposited
    assert_eq!(bout.buf().data(), &[0xff, 0x00]);
    Ok(())
}

#[test]
fn put_writes_single_bits() -> Result<()> {
    let mut bout = OutputBitStream::new([0u8]);
    bout.put(true)
        .put(false)
        .put(true)
        .put(true)
        .put(false)
        .put(true)
        .put(true)
        .put(true);
    assert!(bout.eof() && bout.ok());
    assert_eq!(bout.buf().data(), &[0xb7]);
    Ok(())
}

#[test]
fn align_leaves_skipped_bits_alone() -> Result<()> {
    let mut bout = OutputBitStream::new([0b0000_1111u8, 0]);
    bout.write(0b101, 3).align(8).write(0xaa, 8);
    assert!(bout.ok());
    assert_eq!(bout.buf().data(), &[0b1010_1111, 0xaa]);
    assert!(bout.aligned(8));
    Ok(())
}

#[test]
fn seeks_move_the_put_cursor() -> Result<()> {
    let mut bout = OutputBitStream::new([0u8; 2]);
    bout.seek(4, Whence::Begin).write(0xf, 4);
    bout.seek(-4, Whence::End).write(0xf, 4);
    assert!(bout.ok());
    assert_eq!(bout.buf().data(), &[0x0f, 0x0f]);

    bout.seek(1, Whence::End);
    assert!(bout.fail());
    Ok(())
}

#[test]
fn flush_is_a_no_op() -> Result<()> {
    let mut bout = OutputBitStream::new([0u8]);
    bout.write(0xa, 4).flush().write(0xb, 4);
    assert!(bout.ok());
    assert_eq!(bout.buf().data(), &[0xab]);
    assert_eq!(bout.sync(), None);
    Ok(())
}

#[test]
fn container_insertion_writes_in_iterator_order() -> Result<()> {
    let words = vec![0x1234u16, 0x5678, 0x9abc, 0xdef0];
    let mut bout = OutputBitStream::new([0u8; 8]);
    bout.with(SetRepeat(4)).field(&words);
    assert!(bout.eof() && !bout.fail());
    assert_eq!(
        bout.buf().data(),
        &[0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0]
    );
    Ok(())
}

#[test]
fn fixed_containers_and_groups_insert_their_width() -> Result<()> {
    let mut bout = OutputBitStream::new([0u8; 2]);
    bout.field(&[true, false, true][..])
        .field(&Bits::<5>::new(0b10011))
        .field(&[0x05u8]);
    assert!(bout.ok());
    assert_eq!(bout.buf().data(), &[0b101_10011, 0x05]);
    Ok(())
}

#[test]
fn overrun_mid_container_stops_flagging_not_panicking() -> Result<()> {
    let words = [0x1111u16, 0x2222, 0x3333];
    let mut bout = OutputBitStream::new([0u8; 4]);
    bout.field(&words[..]);
    assert!(bout.fail() && bout.eof());
    // the two fitting elements were written
    assert_eq!(bout.buf().data(), &[0x11, 0x11, 0x22, 0x22]);
    Ok(())
}

#[test]
fn dbg_wrapper_forwards_unchanged() -> Result<()> {
    let mut dbg = DbgOutput::new(OutputBitStream::new([0u8; 2]));
    dbg.write(0b10, 2)
        .put(false)
        .align(8)
        .field(&0xabu8);
    assert!(dbg.ok());
    assert_eq!(dbg.inner().buf().data(), &[0x80, 0xab]);
    Ok(())
}

#[test]
fn write_failure_is_visible_through_not() -> Result<()> {
    let mut bout = OutputBitStream::new([0u8]);
    bout.write(0, 9);
    assert!(!&bout);
    assert!(!bout.ok());
    Ok(())
}
