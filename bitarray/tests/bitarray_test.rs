use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use bitarray::{BitArray, Endian};
use proptest::prelude::*;

proptest! {
    #[test]
    fn from_iter((bits, endian) in arbitrary_bits(300)) {
        let array = to_bitarray(&bits, endian);
        assert_eq!(array.len(), bits.len());
        assert_eq!(array.tolist(), bits);
        for (index, expected) in bits.iter().enumerate() {
            assert_eq!(array.get(index).unwrap(), *expected);
            assert_eq!(array[index], *expected);
        }
        assert_eq!(array.buffer_info().byte_length, bits.len().div_ceil(8));
    }

    #[test]
    fn iter_both_ends((bits, endian) in arbitrary_bits(100)) {
        let array = to_bitarray(&bits, endian);
        let reversed: Vec<bool> = array.iter().rev().collect();
        let expected: Vec<bool> = bits.iter().rev().copied().collect();
        assert_eq!(reversed, expected);
        assert_eq!(array.iter().len(), bits.len());
    }

    #[test]
    fn copy_within_matches_copy_from_clone((bits, endian, destination, source, count) in bits_with_copy_range(300)) {
        let mut within = to_bitarray(&bits, endian);
        let snapshot = within.clone();
        within.copy_within(destination, source, count).unwrap();

        let mut from_clone = to_bitarray(&bits, endian);
        from_clone.copy_from(destination, &snapshot, source, count).unwrap();

        let mut expected = bits.clone();
        expected.copy_within(source..source + count, destination);
        assert_eq!(within.tolist(), expected);
        assert_eq!(from_clone.tolist(), expected);
    }

    #[test]
    fn copy_from_mixed_endian(
        (target, source, destination_start, source_start, count) in two_bits_with_copy_range(300),
        endian in arbitrary_endian(),
    ) {
        let mut array = to_bitarray(&target, endian);
        let other = to_bitarray(&source, endian.opposite());
        array.copy_from(destination_start, &other, source_start, count).unwrap();

        let mut expected = target.clone();
        expected[destination_start..destination_start + count]
            .copy_from_slice(&source[source_start..source_start + count]);
        assert_eq!(array.tolist(), expected);
    }

    #[test]
    fn insert_then_delete_is_identity((bits, endian, start, _) in bits_with_range(200), inserted in prop::collection::vec(any::<bool>(), 0..20)) {
        let original = to_bitarray(&bits, endian);
        let mut array = original.clone();
        for (offset, value) in inserted.iter().enumerate() {
            array.insert(start + offset, *value).unwrap();
        }
        assert_eq!(array.len(), bits.len() + inserted.len());
        assert_eq!(array.slice(start..start + inserted.len(), 1).unwrap().tolist(), inserted);
        array.delete_range(start..start + inserted.len()).unwrap();
        assert_eq!(array, original);
    }

    #[test]
    fn count_and_find_agree((bits, endian, start, stop) in bits_with_range(300), value in any::<bool>()) {
        let array = to_bitarray(&bits, endian);
        let window = &bits[start..stop];
        let count = array.count_range(value, start..stop).unwrap();
        assert_eq!(count, window.iter().filter(|bit| **bit == value).count());
        assert_eq!(array.count(true) + array.count(false), array.len());

        let found = array.find_in(value, start..stop).unwrap();
        assert_eq!(found.is_none(), count == 0);
        assert_eq!(found, window.iter().position(|bit| *bit == value).map(|offset| start + offset));
        let last = array.rfind_in(value, start..stop).unwrap();
        assert_eq!(last, window.iter().rposition(|bit| *bit == value).map(|offset| start + offset));
    }

    #[test]
    fn set_range((bits, endian, start, stop) in bits_with_range(300), value in any::<bool>()) {
        let mut array = to_bitarray(&bits, endian);
        array.set_range(start..stop, value).unwrap();
        let mut expected = bits.clone();
        expected[start..stop].fill(value);
        assert_eq!(array.tolist(), expected);
    }

    #[test]
    fn invert_range((bits, endian, start, stop) in bits_with_range(300)) {
        let mut array = to_bitarray(&bits, endian);
        array.invert_range(start..stop).unwrap();
        let mut expected = bits.clone();
        for bit in &mut expected[start..stop] {
            *bit = !*bit;
        }
        assert_eq!(array.tolist(), expected);
    }

    #[test]
    fn repeat((bits, endian) in arbitrary_bits(70), factor in 0usize..12) {
        let mut array = to_bitarray(&bits, endian);
        array.repeat(factor).unwrap();
        assert_eq!(array.tolist(), bits.repeat(factor));
        assert_eq!((&to_bitarray(&bits, endian) * factor).tolist(), bits.repeat(factor));
    }

    #[test]
    fn sort_and_reverse((bits, endian) in arbitrary_bits(300), descending in any::<bool>()) {
        let mut sorted = to_bitarray(&bits, endian);
        sorted.sort(descending);
        let mut expected = bits.clone();
        expected.sort_unstable();
        if descending {
            expected.reverse();
        }
        assert_eq!(sorted.tolist(), expected);

        let mut reversed = to_bitarray(&bits, endian);
        reversed.reverse();
        let mut expected = bits.clone();
        expected.reverse();
        assert_eq!(reversed.tolist(), expected);
    }

    #[test]
    fn bytes_round_trip_pads_with_zeros((bits, endian) in arbitrary_bits(300)) {
        let array = to_bitarray(&bits, endian);
        let bytes = array.to_bytes();
        assert_eq!(bytes.len(), bits.len().div_ceil(8));
        let restored = BitArray::from_bytes(&bytes, endian).unwrap();
        let mut expected = bits.clone();
        expected.resize(8 * bytes.len(), false);
        assert_eq!(restored.tolist(), expected);
    }

    #[test]
    fn extend_from_bytes_appends((bits, endian) in arbitrary_bits(100), data in prop::collection::vec(any::<u8>(), 0..20)) {
        let mut array = to_bitarray(&bits, endian);
        array.extend_from_bytes(&data).unwrap();
        let mut expected = bits.clone();
        expected.extend(BitArray::from_bytes(&data, endian).unwrap().iter());
        assert_eq!(array.tolist(), expected);
    }

    #[test]
    fn text_and_hex_round_trip((bits, endian) in arbitrary_bits(300)) {
        let array = to_bitarray(&bits, endian);
        assert_eq!(BitArray::from_text(&array.to01(), endian).unwrap(), array);
        assert_eq!(array.to_string(), array.to01());

        let mut nibbles = array.clone();
        nibbles.truncate(bits.len() - bits.len() % 4);
        let hex = nibbles.to_hex().unwrap();
        assert_eq!(hex.len(), nibbles.len() / 4);
        assert_eq!(BitArray::from_hex(&hex, endian).unwrap(), nibbles);
    }

    #[test]
    fn binary_operators_across_endianness((left, right) in equal_length_bits(300), endian in arbitrary_endian()) {
        let left_array = to_bitarray(&left, endian);
        let right_array = to_bitarray(&right, endian.opposite());
        let expected = |combine: fn(bool, bool) -> bool| -> Vec<bool> {
            left.iter().zip(&right).map(|(a, b)| combine(*a, *b)).collect()
        };
        assert_eq!((&left_array & &right_array).tolist(), expected(|a, b| a & b));
        assert_eq!((&left_array | &right_array).tolist(), expected(|a, b| a | b));
        assert_eq!((&left_array ^ &right_array).tolist(), expected(|a, b| a ^ b));
        let inverted: Vec<bool> = left.iter().map(|bit| !bit).collect();
        assert_eq!((!&left_array).tolist(), inverted);
        assert_eq!((&left_array ^ &right_array).endian(), endian);
    }

    #[test]
    fn shifts((bits, endian) in arbitrary_bits(200), count in 0usize..220) {
        let array = to_bitarray(&bits, endian);
        let length = bits.len();
        let toward_start: Vec<bool> = (0..length).map(|index| index + count < length && bits[index + count]).collect();
        let toward_end: Vec<bool> = (0..length).map(|index| index >= count && bits[index - count]).collect();
        assert_eq!((&array << count).tolist(), toward_start);
        assert_eq!((&array >> count).tolist(), toward_end);
    }

    #[test]
    fn concatenation((left, endian) in arbitrary_bits(100), (right, other_endian) in arbitrary_bits(100)) {
        let joined = &to_bitarray(&left, endian) + &to_bitarray(&right, other_endian);
        let mut expected = left.clone();
        expected.extend(&right);
        assert_eq!(joined.tolist(), expected);
        assert_eq!(joined.endian(), endian);
    }

    #[test]
    fn ordering_matches_bool_vectors((left, left_endian) in arbitrary_bits(40), (right, right_endian) in arbitrary_bits(40)) {
        let left_array = to_bitarray(&left, left_endian);
        let right_array = to_bitarray(&right, right_endian);
        assert_eq!(left_array.cmp(&right_array), left.cmp(&right));
        assert_eq!(left_array == right_array, left == right);
    }

    #[test]
    fn equality_and_hash_ignore_endianness((bits, endian) in arbitrary_bits(300)) {
        let array = to_bitarray(&bits, endian);
        let mut other = array.to_endian(endian.opposite());
        assert_eq!(other.endian(), endian.opposite());
        assert_eq!(array, other);
        assert_eq!(hash_of(&array), hash_of(&other));

        // Garbage in the pad bits must not matter either.
        other.fill();
        other.truncate(bits.len());
        other.invert();
        other.invert_range(0..bits.len()).unwrap();
        assert_eq!(array, other);
        assert_eq!(hash_of(&array), hash_of(&other));
    }

    #[test]
    fn search_finds_every_overlapping_match((bits, endian) in arbitrary_bits(120), (needle, needle_endian) in arbitrary_bits(6)) {
        let haystack = to_bitarray(&bits, endian);
        let needle_array = to_bitarray(&needle, needle_endian);
        let expected: Vec<usize> = if needle.len() > bits.len() {
            Vec::new()
        } else {
            (0..=bits.len() - needle.len())
                .filter(|&position| bits[position..position + needle.len()] == needle[..])
                .collect()
        };
        assert_eq!(haystack.search(&needle_array).collect::<Vec<_>>(), expected);
        assert_eq!(haystack.contains(&needle_array), !expected.is_empty());
    }

    #[test]
    fn slice_with_step((bits, endian, start, stop) in bits_with_range(200), step in 1usize..6) {
        let array = to_bitarray(&bits, endian);
        let expected: Vec<bool> = bits[start..stop].iter().step_by(step).copied().collect();
        assert_eq!(array.slice(start..stop, step).unwrap().tolist(), expected);

        let mut deleted = array.clone();
        deleted.delete_slice(start..stop, step).unwrap();
        let kept: Vec<bool> = bits
            .iter()
            .enumerate()
            .filter(|(index, _)| !((start..stop).contains(index) && (index - start) % step == 0))
            .map(|(_, bit)| *bit)
            .collect();
        assert_eq!(deleted.tolist(), kept);

        let mut cleared = array.clone();
        cleared.set_slice_value(start..stop, step, false).unwrap();
        let survivors = bits[start..stop]
            .iter()
            .enumerate()
            .filter(|(offset, bit)| **bit && offset % step != 0)
            .count();
        assert_eq!(cleared.count_range(true, start..stop).unwrap(), survivors);
    }

    #[test]
    fn set_slice_replaces_range((bits, endian, start, stop) in bits_with_range(200), (replacement, other_endian) in arbitrary_bits(40)) {
        let mut array = to_bitarray(&bits, endian);
        array.set_slice(start..stop, 1, &to_bitarray(&replacement, other_endian)).unwrap();
        let mut expected = bits.clone();
        expected.splice(start..stop, replacement.iter().copied());
        assert_eq!(array.tolist(), expected);
    }
}

#[test]
fn repeat_doubles_into_place() {
    let mut bits = BitArray::from_text("10110", Endian::Little).unwrap();
    bits.repeat(3).unwrap();
    assert_eq!(bits.to01(), "101101011010110");
    bits.repeat(0).unwrap();
    assert!(bits.is_empty());
}

#[test]
fn repeat_overflow_leaves_array_untouched() {
    let mut bits = BitArray::from_text("101", Endian::Big).unwrap();
    let error = bits.repeat(usize::MAX / 2).unwrap_err();
    assert!(matches!(error, bitarray::BitArrayError::Overflow(_)));
    assert_eq!(bits.to01(), "101");
}

#[test]
fn sort_examples() {
    let mut ascending = BitArray::from_text("10110", Endian::Big).unwrap();
    ascending.sort(false);
    assert_eq!(ascending.to01(), "00111");
    let mut descending = BitArray::from_text("10110", Endian::Little).unwrap();
    descending.sort(true);
    assert_eq!(descending.to01(), "11100");
}

#[test]
fn endianness_only_changes_storage() {
    let little = BitArray::from_text("101", Endian::Little).unwrap();
    let big = BitArray::from_text("101", Endian::Big).unwrap();
    assert_eq!(little.to_bytes(), vec![0x05]);
    assert_eq!(big.to_bytes(), vec![0xa0]);
    for index in 0..3 {
        assert_eq!(little.get(index).unwrap(), big.get(index).unwrap());
    }
    assert_eq!(little, big);
    assert_eq!(hash_of(&little), hash_of(&big));

    let mut swapped = big.clone();
    swapped.bytereverse(0..1).unwrap();
    assert_eq!(swapped.as_bytes(), &[0x05]);
    assert_eq!(swapped.to01(), "000");
}

#[test]
fn failed_text_extension_is_atomic() {
    let mut bits = BitArray::with_endian(Endian::Little);
    let error = bits.extend_text("101X01").unwrap_err();
    assert_eq!(
        error,
        bitarray::BitArrayError::InvalidFormat {
            character: 'X',
            code_point: 0x58
        }
    );
    assert_eq!(bits.len(), 0);

    let mut values = BitArray::from_text("11", Endian::Big).unwrap();
    assert!(values.extend_values(&[1, 0, 2, 1]).is_err());
    assert_eq!(values.to01(), "11");
}

#[test]
fn sequence_operations() {
    let mut bits: BitArray = BitArray::from_text("0110", Endian::Big).unwrap();
    bits.push(true);
    assert_eq!(bits.to01(), "01101");
    assert!(bits.pop(None).unwrap());
    assert!(!bits.pop(Some(0)).unwrap());
    assert_eq!(bits.to01(), "110");
    bits.remove_value(false).unwrap();
    assert_eq!(bits.to01(), "11");
    assert!(bits.remove_value(false).is_err());
    assert_eq!(bits.index_of(true).unwrap(), 0);
    assert!(bits.index_of(false).is_err());
    bits.clear();
    assert!(bits.pop(None).is_err());
    assert!(bits.insert(1, true).is_err());
    bits.insert(0, true).unwrap();
    assert_eq!(bits.to01(), "1");
}

#[test]
fn out_of_range_access_is_an_error() {
    let mut bits = BitArray::zeros(10, Endian::Little);
    assert_eq!(
        bits.get(10).unwrap_err(),
        bitarray::BitArrayError::IndexOutOfRange { index: 10, length: 10 }
    );
    assert!(bits.set(10, true).is_err());
    assert!(bits.copy_within(5, 0, 6).is_err());
    assert!(bits.count_range(true, 4..11).is_err());
    assert!(bits.delete_range(6..4).is_err());
    assert!(bits.bytereverse(0..3).is_err());
    assert!(bits.slice(0..4, 0).is_err());
    assert!(bits.set_slice(0..10, 2, &BitArray::zeros(4, Endian::Big)).is_err());
    assert!(bits.try_bitand_assign(&BitArray::zeros(9, Endian::Little)).is_err());
    assert!(bitarray::bits_to_bytes(-1).is_err());
    assert_eq!(bitarray::bits_to_bytes(17).unwrap(), 3);
}

#[test]
#[should_panic(expected = "out of range")]
fn indexing_past_the_end_panics() {
    let bits = BitArray::zeros(3, Endian::Big);
    let _value: bool = bits[3];
}

#[test]
#[should_panic(expected = "equal length")]
fn mismatched_operator_lengths_panic() {
    let _ = &BitArray::zeros(3, Endian::Big) | &BitArray::zeros(4, Endian::Big);
}

#[test]
fn fill_pads_to_a_byte_boundary() {
    let mut bits = BitArray::ones(11, Endian::Little);
    assert_eq!(bits.buffer_info().padding, 5);
    assert_eq!(bits.fill(), 5);
    assert_eq!(bits.len(), 16);
    assert_eq!(bits.to01(), "1111111111100000");
    assert_eq!(bits.fill(), 0);
}

#[test]
fn pack_and_unpack() {
    let mut bits = BitArray::with_endian(Endian::Big);
    bits.pack(&[0, 7, 0, 0, 255]).unwrap();
    assert_eq!(bits.to01(), "01001");
    assert_eq!(bits.unpack(b'.', b'#'), b".#..#".to_vec());
    assert!(!bits.all());
    assert!(bits.any());
    assert!(BitArray::zeros(0, Endian::Big).all());
}

#[test]
fn hex_requires_whole_nibbles() {
    assert!(BitArray::zeros(6, Endian::Big).to_hex().is_err());
    assert!(BitArray::from_hex("1g", Endian::Big).is_err());
    let little = BitArray::from_hex("1A f", Endian::Little).unwrap();
    assert_eq!(little.to01(), "100001011111");
}

#[test]
fn ordering_is_lexicographic_then_by_length() {
    let parse = |text: &str| BitArray::from_text(text, Endian::Little).unwrap();
    assert!(parse("0111") < parse("1"));
    assert!(parse("10") < parse("100"));
    assert!(parse("") < parse("0"));
    assert!(parse("1").compare(&parse("1"), bitarray::Relation::Le));
    assert_eq!(bitarray::Relation::Ge.to_string(), ">=");
}

#[test]
fn debug_shows_endianness_and_bits() {
    let bits = BitArray::from_text("1001", Endian::Little).unwrap();
    assert_eq!(format!("{bits:?}"), "BitArray { endian: Little, bits: 1001 }");
}

fn to_bitarray(bits: &[bool], endian: Endian) -> BitArray {
    let mut array = BitArray::with_endian(endian);
    array.extend(bits.iter().copied());
    array
}

fn hash_of(array: &BitArray) -> u64 {
    let mut hasher = DefaultHasher::new();
    array.hash(&mut hasher);
    hasher.finish()
}

fn arbitrary_endian() -> impl Strategy<Value = Endian> {
    any::<bool>().prop_map(|little| if little { Endian::Little } else { Endian::Big })
}

fn arbitrary_bits(max_length: usize) -> impl Strategy<Value = (Vec<bool>, Endian)> {
    (prop::collection::vec(any::<bool>(), 0..max_length), arbitrary_endian())
}

fn bits_with_range(max_length: usize) -> impl Strategy<Value = (Vec<bool>, Endian, usize, usize)> {
    (0..max_length)
        .prop_flat_map(|length| {
            (
                prop::collection::vec(any::<bool>(), length),
                arbitrary_endian(),
                0..=length,
                0..=length,
            )
        })
        .prop_map(|(bits, endian, first, second)| (bits, endian, first.min(second), first.max(second)))
}

fn bits_with_copy_range(max_length: usize) -> impl Strategy<Value = (Vec<bool>, Endian, usize, usize, usize)> {
    (1..max_length)
        .prop_flat_map(|length| {
            (
                prop::collection::vec(any::<bool>(), length),
                arbitrary_endian(),
                0..=length,
                0..=length,
                0..=length,
            )
        })
        .prop_map(|(bits, endian, destination, source, count)| {
            let count = count.min(bits.len() - destination).min(bits.len() - source);
            (bits, endian, destination, source, count)
        })
}

fn two_bits_with_copy_range(max_length: usize) -> impl Strategy<Value = (Vec<bool>, Vec<bool>, usize, usize, usize)> {
    (1..max_length, 1..max_length)
        .prop_flat_map(|(target_length, source_length)| {
            (
                prop::collection::vec(any::<bool>(), target_length),
                prop::collection::vec(any::<bool>(), source_length),
                0..=target_length,
                0..=source_length,
                0..=target_length.min(source_length),
            )
        })
        .prop_map(|(target, source, destination_start, source_start, count)| {
            let count = count
                .min(target.len() - destination_start)
                .min(source.len() - source_start);
            (target, source, destination_start, source_start, count)
        })
}

fn equal_length_bits(max_length: usize) -> impl Strategy<Value = (Vec<bool>, Vec<bool>)> {
    (0..max_length).prop_flat_map(|length| {
        (
            prop::collection::vec(any::<bool>(), length),
            prop::collection::vec(any::<bool>(), length),
        )
    })
}
