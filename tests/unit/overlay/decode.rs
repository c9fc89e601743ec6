//! Tests for distance decoding of both field encodings

#[cfg(test)]
mod tests {
    use visual_sdf::overlay::decode::{DecodeStrategy, decode_distance};
    use visual_sdf::pixel::Pixel;

    // Tests red-minus-green decoding including negative values
    // Verified by dropping the green term
    #[test]
    fn test_channel_difference_decoding() {
        let strategy = DecodeStrategy::ChannelDifference;

        let full = decode_distance(Pixel::rgb(255, 0, 0), strategy, 600.0, 1.0);
        assert!((full - 600.0).abs() < 1e-9);

        let equal = decode_distance(Pixel::rgb(77, 77, 200), strategy, 600.0, 0.5);
        assert!(equal.abs() < 1e-12);

        let inside = decode_distance(Pixel::rgb(0, 51, 0), strategy, 600.0, 1.0);
        assert!((inside + 120.0).abs() < 1e-9);
    }

    // Tests single-channel decoding ignores green
    // Verified by sharing the channel-difference formula
    #[test]
    fn test_single_channel_decoding() {
        let strategy = DecodeStrategy::SingleChannel;
        let distance = decode_distance(Pixel::rgb(51, 255, 0), strategy, 600.0, 0.1);
        assert!((distance - 12.0).abs() < 1e-9);
    }

    // Tests space resolution scales linearly
    // Verified by omitting the resolution factor
    #[test]
    fn test_space_resolution_scaling() {
        let pixel = Pixel::rgb(100, 50, 0);
        let strategy = DecodeStrategy::ChannelDifference;
        let base = decode_distance(pixel, strategy, 600.0, 1.0);
        let scaled = decode_distance(pixel, strategy, 600.0, 0.25);
        assert!((scaled - base * 0.25).abs() < 1e-9);
    }

    // Tests each encoding carries its own skip rules
    // Verified by swapping the two predicates
    #[test]
    fn test_strategy_skip_rules() {
        assert_eq!(DecodeStrategy::default(), DecodeStrategy::ChannelDifference);
        assert!(DecodeStrategy::ChannelDifference.skips_protected_pixels());
        assert!(!DecodeStrategy::ChannelDifference.skips_negative_distances());
        assert!(!DecodeStrategy::SingleChannel.skips_protected_pixels());
        assert!(DecodeStrategy::SingleChannel.skips_negative_distances());
    }
}
