use hexsurf::{ColourMap, ColourMapType, ColourOrder};
use strum::IntoEnumIterator;

#[test]
fn test_every_scheme_stays_in_range() {
    for map_type in ColourMapType::iter() {
        let colour_map = ColourMap::new(map_type);
        for step in 0..=100 {
            let datum = step as f32 / 100.0;
            let colour = colour_map.convert(datum);
            for channel in &[colour.red, colour.green, colour.blue] {
                assert!(
                    (0.0..=1.0).contains(channel),
                    "{} gave {:?} for {}",
                    map_type,
                    colour,
                    datum
                );
            }
        }
    }
}

#[test]
fn test_out_of_range_input_never_panics() {
    for map_type in ColourMapType::iter() {
        let colour_map = ColourMap::new(map_type);
        for datum in &[-10.0, -0.01, 1.01, 10.0, f32::NAN, f32::INFINITY] {
            let colour = colour_map.convert(*datum);
            assert!(colour.red.is_finite(), "{} gave {:?}", map_type, colour);
        }
    }
}

#[test]
fn test_bgr_is_reversed_rgb() {
    for map_type in ColourMapType::iter() {
        let rgb = ColourMap::new(map_type);
        let mut bgr = ColourMap::new(map_type);
        bgr.set_order(ColourOrder::Bgr);
        let [r, g, b] = rgb.convert_ordered(0.3);
        assert_eq!(bgr.convert_ordered(0.3), [b, g, r]);
    }
}
