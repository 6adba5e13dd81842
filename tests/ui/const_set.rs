use tiny_bitset::BitSet;

const VOWELS: BitSet = BitSet::const_from_members(&[0, 4, 8, 14, 20]);
const ODD: BitSet = BitSet::const_from_members(&[1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25]);
const BOTH: BitSet = VOWELS.intersection(&ODD);

fn main() {
    assert_eq!(VOWELS.len(), 5);
    assert!(BOTH.is_empty());
    assert_eq!(VOWELS.union(&ODD).len(), 18);
}
