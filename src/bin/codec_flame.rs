use anybase::Codec;

fn main() {
    let codec = Codec::base62();
    let input = (0..10000).map(|i| (i % 251) as u8).collect::<Vec<_>>();

    for _ in 0..1000 {
        let encoded = codec.encode(&input);
        let decoded = codec.decode(&encoded).unwrap();
        assert_eq!(decoded, input);
    }
}
