//! Static lookup tables backing the perceptual colour maps. Each table spans
//! `[0, 1]` in equal steps, first entry at `0.0` and last entry at `1.0`.
//! Sampling is nearest-entry; see [super::ColourMap::convert].
//!
//! Magma, inferno, plasma and viridis are matplotlib's 256-entry tables, as
//! published (8-bit sRGB) in d3-scale-chromatic. Cividis is
//! d3-scale-chromatic's cividis curve tabulated at 256 points.

/// Decode an 8-bit `0xRRGGBB` entry
const fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Magma, 256 entries
pub static MAGMA: [[f32; 3]; 256] = [
    rgb(0x000004), rgb(0x010005), rgb(0x010106), rgb(0x010108),
    rgb(0x020109), rgb(0x02020b), rgb(0x02020d), rgb(0x03030f),
    rgb(0x030312), rgb(0x040414), rgb(0x050416), rgb(0x060518),
    rgb(0x06051a), rgb(0x07061c), rgb(0x08071e), rgb(0x090720),
    rgb(0x0a0822), rgb(0x0b0924), rgb(0x0c0926), rgb(0x0d0a29),
    rgb(0x0e0b2b), rgb(0x100b2d), rgb(0x110c2f), rgb(0x120d31),
    rgb(0x130d34), rgb(0x140e36), rgb(0x150e38), rgb(0x160f3b),
    rgb(0x180f3d), rgb(0x19103f), rgb(0x1a1042), rgb(0x1c1044),
    rgb(0x1d1147), rgb(0x1e1149), rgb(0x20114b), rgb(0x21114e),
    rgb(0x221150), rgb(0x241253), rgb(0x251255), rgb(0x271258),
    rgb(0x29115a), rgb(0x2a115c), rgb(0x2c115f), rgb(0x2d1161),
    rgb(0x2f1163), rgb(0x311165), rgb(0x331067), rgb(0x341069),
    rgb(0x36106b), rgb(0x38106c), rgb(0x390f6e), rgb(0x3b0f70),
    rgb(0x3d0f71), rgb(0x3f0f72), rgb(0x400f74), rgb(0x420f75),
    rgb(0x440f76), rgb(0x451077), rgb(0x471078), rgb(0x491078),
    rgb(0x4a1079), rgb(0x4c117a), rgb(0x4e117b), rgb(0x4f127b),
    rgb(0x51127c), rgb(0x52137c), rgb(0x54137d), rgb(0x56147d),
    rgb(0x57157e), rgb(0x59157e), rgb(0x5a167e), rgb(0x5c167f),
    rgb(0x5d177f), rgb(0x5f187f), rgb(0x601880), rgb(0x621980),
    rgb(0x641a80), rgb(0x651a80), rgb(0x671b80), rgb(0x681c81),
    rgb(0x6a1c81), rgb(0x6b1d81), rgb(0x6d1d81), rgb(0x6e1e81),
    rgb(0x701f81), rgb(0x721f81), rgb(0x732081), rgb(0x752181),
    rgb(0x762181), rgb(0x782281), rgb(0x792282), rgb(0x7b2382),
    rgb(0x7c2382), rgb(0x7e2482), rgb(0x802582), rgb(0x812581),
    rgb(0x832681), rgb(0x842681), rgb(0x862781), rgb(0x882781),
    rgb(0x892881), rgb(0x8b2981), rgb(0x8c2981), rgb(0x8e2a81),
    rgb(0x902a81), rgb(0x912b81), rgb(0x932b80), rgb(0x942c80),
    rgb(0x962c80), rgb(0x982d80), rgb(0x992d80), rgb(0x9b2e7f),
    rgb(0x9c2e7f), rgb(0x9e2f7f), rgb(0xa02f7f), rgb(0xa1307e),
    rgb(0xa3307e), rgb(0xa5317e), rgb(0xa6317d), rgb(0xa8327d),
    rgb(0xaa337d), rgb(0xab337c), rgb(0xad347c), rgb(0xae347b),
    rgb(0xb0357b), rgb(0xb2357b), rgb(0xb3367a), rgb(0xb5367a),
    rgb(0xb73779), rgb(0xb83779), rgb(0xba3878), rgb(0xbc3978),
    rgb(0xbd3977), rgb(0xbf3a77), rgb(0xc03a76), rgb(0xc23b75),
    rgb(0xc43c75), rgb(0xc53c74), rgb(0xc73d73), rgb(0xc83e73),
    rgb(0xca3e72), rgb(0xcc3f71), rgb(0xcd4071), rgb(0xcf4070),
    rgb(0xd0416f), rgb(0xd2426f), rgb(0xd3436e), rgb(0xd5446d),
    rgb(0xd6456c), rgb(0xd8456c), rgb(0xd9466b), rgb(0xdb476a),
    rgb(0xdc4869), rgb(0xde4968), rgb(0xdf4a68), rgb(0xe04c67),
    rgb(0xe24d66), rgb(0xe34e65), rgb(0xe44f64), rgb(0xe55064),
    rgb(0xe75263), rgb(0xe85362), rgb(0xe95462), rgb(0xea5661),
    rgb(0xeb5760), rgb(0xec5860), rgb(0xed5a5f), rgb(0xee5b5e),
    rgb(0xef5d5e), rgb(0xf05f5e), rgb(0xf1605d), rgb(0xf2625d),
    rgb(0xf2645c), rgb(0xf3655c), rgb(0xf4675c), rgb(0xf4695c),
    rgb(0xf56b5c), rgb(0xf66c5c), rgb(0xf66e5c), rgb(0xf7705c),
    rgb(0xf7725c), rgb(0xf8745c), rgb(0xf8765c), rgb(0xf9785d),
    rgb(0xf9795d), rgb(0xf97b5d), rgb(0xfa7d5e), rgb(0xfa7f5e),
    rgb(0xfa815f), rgb(0xfb835f), rgb(0xfb8560), rgb(0xfb8761),
    rgb(0xfc8961), rgb(0xfc8a62), rgb(0xfc8c63), rgb(0xfc8e64),
    rgb(0xfc9065), rgb(0xfd9266), rgb(0xfd9467), rgb(0xfd9668),
    rgb(0xfd9869), rgb(0xfd9a6a), rgb(0xfd9b6b), rgb(0xfe9d6c),
    rgb(0xfe9f6d), rgb(0xfea16e), rgb(0xfea36f), rgb(0xfea571),
    rgb(0xfea772), rgb(0xfea973), rgb(0xfeaa74), rgb(0xfeac76),
    rgb(0xfeae77), rgb(0xfeb078), rgb(0xfeb27a), rgb(0xfeb47b),
    rgb(0xfeb67c), rgb(0xfeb77e), rgb(0xfeb97f), rgb(0xfebb81),
    rgb(0xfebd82), rgb(0xfebf84), rgb(0xfec185), rgb(0xfec287),
    rgb(0xfec488), rgb(0xfec68a), rgb(0xfec88c), rgb(0xfeca8d),
    rgb(0xfecc8f), rgb(0xfecd90), rgb(0xfecf92), rgb(0xfed194),
    rgb(0xfed395), rgb(0xfed597), rgb(0xfed799), rgb(0xfed89a),
    rgb(0xfdda9c), rgb(0xfddc9e), rgb(0xfddea0), rgb(0xfde0a1),
    rgb(0xfde2a3), rgb(0xfde3a5), rgb(0xfde5a7), rgb(0xfde7a9),
    rgb(0xfde9aa), rgb(0xfdebac), rgb(0xfcecae), rgb(0xfceeb0),
    rgb(0xfcf0b2), rgb(0xfcf2b4), rgb(0xfcf4b6), rgb(0xfcf6b8),
    rgb(0xfcf7b9), rgb(0xfcf9bb), rgb(0xfcfbbd), rgb(0xfcfdbf),
];

/// Inferno, 256 entries
pub static INFERNO: [[f32; 3]; 256] = [
    rgb(0x000004), rgb(0x010005), rgb(0x010106), rgb(0x010108),
    rgb(0x02010a), rgb(0x02020c), rgb(0x02020e), rgb(0x030210),
    rgb(0x040312), rgb(0x040314), rgb(0x050417), rgb(0x060419),
    rgb(0x07051b), rgb(0x08051d), rgb(0x09061f), rgb(0x0a0722),
    rgb(0x0b0724), rgb(0x0c0826), rgb(0x0d0829), rgb(0x0e092b),
    rgb(0x10092d), rgb(0x110a30), rgb(0x120a32), rgb(0x140b34),
    rgb(0x150b37), rgb(0x160b39), rgb(0x180c3c), rgb(0x190c3e),
    rgb(0x1b0c41), rgb(0x1c0c43), rgb(0x1e0c45), rgb(0x1f0c48),
    rgb(0x210c4a), rgb(0x230c4c), rgb(0x240c4f), rgb(0x260c51),
    rgb(0x280b53), rgb(0x290b55), rgb(0x2b0b57), rgb(0x2d0b59),
    rgb(0x2f0a5b), rgb(0x310a5c), rgb(0x320a5e), rgb(0x340a5f),
    rgb(0x360961), rgb(0x380962), rgb(0x390963), rgb(0x3b0964),
    rgb(0x3d0965), rgb(0x3e0966), rgb(0x400a67), rgb(0x420a68),
    rgb(0x440a68), rgb(0x450a69), rgb(0x470b6a), rgb(0x490b6a),
    rgb(0x4a0c6b), rgb(0x4c0c6b), rgb(0x4d0d6c), rgb(0x4f0d6c),
    rgb(0x510e6c), rgb(0x520e6d), rgb(0x540f6d), rgb(0x550f6d),
    rgb(0x57106e), rgb(0x59106e), rgb(0x5a116e), rgb(0x5c126e),
    rgb(0x5d126e), rgb(0x5f136e), rgb(0x61136e), rgb(0x62146e),
    rgb(0x64156e), rgb(0x65156e), rgb(0x67166e), rgb(0x69166e),
    rgb(0x6a176e), rgb(0x6c186e), rgb(0x6d186e), rgb(0x6f196e),
    rgb(0x71196e), rgb(0x721a6e), rgb(0x741a6e), rgb(0x751b6e),
    rgb(0x771c6d), rgb(0x781c6d), rgb(0x7a1d6d), rgb(0x7c1d6d),
    rgb(0x7d1e6d), rgb(0x7f1e6c), rgb(0x801f6c), rgb(0x82206c),
    rgb(0x84206b), rgb(0x85216b), rgb(0x87216b), rgb(0x88226a),
    rgb(0x8a226a), rgb(0x8c2369), rgb(0x8d2369), rgb(0x8f2469),
    rgb(0x902568), rgb(0x922568), rgb(0x932667), rgb(0x952667),
    rgb(0x972766), rgb(0x982766), rgb(0x9a2865), rgb(0x9b2964),
    rgb(0x9d2964), rgb(0x9f2a63), rgb(0xa02a63), rgb(0xa22b62),
    rgb(0xa32c61), rgb(0xa52c60), rgb(0xa62d60), rgb(0xa82e5f),
    rgb(0xa92e5e), rgb(0xab2f5e), rgb(0xad305d), rgb(0xae305c),
    rgb(0xb0315b), rgb(0xb1325a), rgb(0xb3325a), rgb(0xb43359),
    rgb(0xb63458), rgb(0xb73557), rgb(0xb93556), rgb(0xba3655),
    rgb(0xbc3754), rgb(0xbd3853), rgb(0xbf3952), rgb(0xc03a51),
    rgb(0xc13a50), rgb(0xc33b4f), rgb(0xc43c4e), rgb(0xc63d4d),
    rgb(0xc73e4c), rgb(0xc83f4b), rgb(0xca404a), rgb(0xcb4149),
    rgb(0xcc4248), rgb(0xce4347), rgb(0xcf4446), rgb(0xd04545),
    rgb(0xd24644), rgb(0xd34743), rgb(0xd44842), rgb(0xd54a41),
    rgb(0xd74b3f), rgb(0xd84c3e), rgb(0xd94d3d), rgb(0xda4e3c),
    rgb(0xdb503b), rgb(0xdd513a), rgb(0xde5238), rgb(0xdf5337),
    rgb(0xe05536), rgb(0xe15635), rgb(0xe25734), rgb(0xe35933),
    rgb(0xe45a31), rgb(0xe55c30), rgb(0xe65d2f), rgb(0xe75e2e),
    rgb(0xe8602d), rgb(0xe9612b), rgb(0xea632a), rgb(0xeb6429),
    rgb(0xeb6628), rgb(0xec6726), rgb(0xed6925), rgb(0xee6a24),
    rgb(0xef6c23), rgb(0xef6e21), rgb(0xf06f20), rgb(0xf1711f),
    rgb(0xf1731d), rgb(0xf2741c), rgb(0xf3761b), rgb(0xf37819),
    rgb(0xf47918), rgb(0xf57b17), rgb(0xf57d15), rgb(0xf67e14),
    rgb(0xf68013), rgb(0xf78212), rgb(0xf78410), rgb(0xf8850f),
    rgb(0xf8870e), rgb(0xf8890c), rgb(0xf98b0b), rgb(0xf98c0a),
    rgb(0xf98e09), rgb(0xfa9008), rgb(0xfa9207), rgb(0xfa9407),
    rgb(0xfb9606), rgb(0xfb9706), rgb(0xfb9906), rgb(0xfb9b06),
    rgb(0xfb9d07), rgb(0xfc9f07), rgb(0xfca108), rgb(0xfca309),
    rgb(0xfca50a), rgb(0xfca60c), rgb(0xfca80d), rgb(0xfcaa0f),
    rgb(0xfcac11), rgb(0xfcae12), rgb(0xfcb014), rgb(0xfcb216),
    rgb(0xfcb418), rgb(0xfbb61a), rgb(0xfbb81d), rgb(0xfbba1f),
    rgb(0xfbbc21), rgb(0xfbbe23), rgb(0xfac026), rgb(0xfac228),
    rgb(0xfac42a), rgb(0xfac62d), rgb(0xf9c72f), rgb(0xf9c932),
    rgb(0xf9cb35), rgb(0xf8cd37), rgb(0xf8cf3a), rgb(0xf7d13d),
    rgb(0xf7d340), rgb(0xf6d543), rgb(0xf6d746), rgb(0xf5d949),
    rgb(0xf5db4c), rgb(0xf4dd4f), rgb(0xf4df53), rgb(0xf4e156),
    rgb(0xf3e35a), rgb(0xf3e55d), rgb(0xf2e661), rgb(0xf2e865),
    rgb(0xf2ea69), rgb(0xf1ec6d), rgb(0xf1ed71), rgb(0xf1ef75),
    rgb(0xf1f179), rgb(0xf2f27d), rgb(0xf2f482), rgb(0xf3f586),
    rgb(0xf3f68a), rgb(0xf4f88e), rgb(0xf5f992), rgb(0xf6fa96),
    rgb(0xf8fb9a), rgb(0xf9fc9d), rgb(0xfafda1), rgb(0xfcffa4),
];

/// Plasma, 256 entries
pub static PLASMA: [[f32; 3]; 256] = [
    rgb(0x0d0887), rgb(0x100788), rgb(0x130789), rgb(0x16078a),
    rgb(0x19068c), rgb(0x1b068d), rgb(0x1d068e), rgb(0x20068f),
    rgb(0x220690), rgb(0x240691), rgb(0x260591), rgb(0x280592),
    rgb(0x2a0593), rgb(0x2c0594), rgb(0x2e0595), rgb(0x2f0596),
    rgb(0x310597), rgb(0x330597), rgb(0x350498), rgb(0x370499),
    rgb(0x38049a), rgb(0x3a049a), rgb(0x3c049b), rgb(0x3e049c),
    rgb(0x3f049c), rgb(0x41049d), rgb(0x43039e), rgb(0x44039e),
    rgb(0x46039f), rgb(0x48039f), rgb(0x4903a0), rgb(0x4b03a1),
    rgb(0x4c02a1), rgb(0x4e02a2), rgb(0x5002a2), rgb(0x5102a3),
    rgb(0x5302a3), rgb(0x5502a4), rgb(0x5601a4), rgb(0x5801a4),
    rgb(0x5901a5), rgb(0x5b01a5), rgb(0x5c01a6), rgb(0x5e01a6),
    rgb(0x6001a6), rgb(0x6100a7), rgb(0x6300a7), rgb(0x6400a7),
    rgb(0x6600a7), rgb(0x6700a8), rgb(0x6900a8), rgb(0x6a00a8),
    rgb(0x6c00a8), rgb(0x6e00a8), rgb(0x6f00a8), rgb(0x7100a8),
    rgb(0x7201a8), rgb(0x7401a8), rgb(0x7501a8), rgb(0x7701a8),
    rgb(0x7801a8), rgb(0x7a02a8), rgb(0x7b02a8), rgb(0x7d03a8),
    rgb(0x7e03a8), rgb(0x8004a8), rgb(0x8104a7), rgb(0x8305a7),
    rgb(0x8405a7), rgb(0x8606a6), rgb(0x8707a6), rgb(0x8808a6),
    rgb(0x8a09a5), rgb(0x8b0aa5), rgb(0x8d0ba5), rgb(0x8e0ca4),
    rgb(0x8f0da4), rgb(0x910ea3), rgb(0x920fa3), rgb(0x9410a2),
    rgb(0x9511a1), rgb(0x9613a1), rgb(0x9814a0), rgb(0x99159f),
    rgb(0x9a169f), rgb(0x9c179e), rgb(0x9d189d), rgb(0x9e199d),
    rgb(0xa01a9c), rgb(0xa11b9b), rgb(0xa21d9a), rgb(0xa31e9a),
    rgb(0xa51f99), rgb(0xa62098), rgb(0xa72197), rgb(0xa82296),
    rgb(0xaa2395), rgb(0xab2494), rgb(0xac2694), rgb(0xad2793),
    rgb(0xae2892), rgb(0xb02991), rgb(0xb12a90), rgb(0xb22b8f),
    rgb(0xb32c8e), rgb(0xb42e8d), rgb(0xb52f8c), rgb(0xb6308b),
    rgb(0xb7318a), rgb(0xb83289), rgb(0xba3388), rgb(0xbb3488),
    rgb(0xbc3587), rgb(0xbd3786), rgb(0xbe3885), rgb(0xbf3984),
    rgb(0xc03a83), rgb(0xc13b82), rgb(0xc23c81), rgb(0xc33d80),
    rgb(0xc43e7f), rgb(0xc5407e), rgb(0xc6417d), rgb(0xc7427c),
    rgb(0xc8437b), rgb(0xc9447a), rgb(0xca457a), rgb(0xcb4679),
    rgb(0xcc4778), rgb(0xcc4977), rgb(0xcd4a76), rgb(0xce4b75),
    rgb(0xcf4c74), rgb(0xd04d73), rgb(0xd14e72), rgb(0xd24f71),
    rgb(0xd35171), rgb(0xd45270), rgb(0xd5536f), rgb(0xd5546e),
    rgb(0xd6556d), rgb(0xd7566c), rgb(0xd8576b), rgb(0xd9586a),
    rgb(0xda5a6a), rgb(0xda5b69), rgb(0xdb5c68), rgb(0xdc5d67),
    rgb(0xdd5e66), rgb(0xde5f65), rgb(0xde6164), rgb(0xdf6263),
    rgb(0xe06363), rgb(0xe16462), rgb(0xe26561), rgb(0xe26660),
    rgb(0xe3685f), rgb(0xe4695e), rgb(0xe56a5d), rgb(0xe56b5d),
    rgb(0xe66c5c), rgb(0xe76e5b), rgb(0xe76f5a), rgb(0xe87059),
    rgb(0xe97158), rgb(0xe97257), rgb(0xea7457), rgb(0xeb7556),
    rgb(0xeb7655), rgb(0xec7754), rgb(0xed7953), rgb(0xed7a52),
    rgb(0xee7b51), rgb(0xef7c51), rgb(0xef7e50), rgb(0xf07f4f),
    rgb(0xf0804e), rgb(0xf1814d), rgb(0xf1834c), rgb(0xf2844b),
    rgb(0xf3854b), rgb(0xf3874a), rgb(0xf48849), rgb(0xf48948),
    rgb(0xf58b47), rgb(0xf58c46), rgb(0xf68d45), rgb(0xf68f44),
    rgb(0xf79044), rgb(0xf79143), rgb(0xf79342), rgb(0xf89441),
    rgb(0xf89540), rgb(0xf9973f), rgb(0xf9983e), rgb(0xf99a3e),
    rgb(0xfa9b3d), rgb(0xfa9c3c), rgb(0xfa9e3b), rgb(0xfb9f3a),
    rgb(0xfba139), rgb(0xfba238), rgb(0xfca338), rgb(0xfca537),
    rgb(0xfca636), rgb(0xfca835), rgb(0xfca934), rgb(0xfdab33),
    rgb(0xfdac33), rgb(0xfdae32), rgb(0xfdaf31), rgb(0xfdb130),
    rgb(0xfdb22f), rgb(0xfdb42f), rgb(0xfdb52e), rgb(0xfeb72d),
    rgb(0xfeb82c), rgb(0xfeba2c), rgb(0xfebb2b), rgb(0xfebd2a),
    rgb(0xfebe2a), rgb(0xfec029), rgb(0xfdc229), rgb(0xfdc328),
    rgb(0xfdc527), rgb(0xfdc627), rgb(0xfdc827), rgb(0xfdca26),
    rgb(0xfdcb26), rgb(0xfccd25), rgb(0xfcce25), rgb(0xfcd025),
    rgb(0xfcd225), rgb(0xfbd324), rgb(0xfbd524), rgb(0xfbd724),
    rgb(0xfad824), rgb(0xfada24), rgb(0xf9dc24), rgb(0xf9dd25),
    rgb(0xf8df25), rgb(0xf8e125), rgb(0xf7e225), rgb(0xf7e425),
    rgb(0xf6e626), rgb(0xf6e826), rgb(0xf5e926), rgb(0xf5eb27),
    rgb(0xf4ed27), rgb(0xf3ee27), rgb(0xf3f027), rgb(0xf2f227),
    rgb(0xf1f426), rgb(0xf1f525), rgb(0xf0f724), rgb(0xf0f921),
];

/// Viridis, 256 entries
pub static VIRIDIS: [[f32; 3]; 256] = [
    rgb(0x440154), rgb(0x440256), rgb(0x450457), rgb(0x450559),
    rgb(0x46075a), rgb(0x46085c), rgb(0x460a5d), rgb(0x460b5e),
    rgb(0x470d60), rgb(0x470e61), rgb(0x471063), rgb(0x471164),
    rgb(0x471365), rgb(0x481467), rgb(0x481668), rgb(0x481769),
    rgb(0x48186a), rgb(0x481a6c), rgb(0x481b6d), rgb(0x481c6e),
    rgb(0x481d6f), rgb(0x481f70), rgb(0x482071), rgb(0x482173),
    rgb(0x482374), rgb(0x482475), rgb(0x482576), rgb(0x482677),
    rgb(0x482878), rgb(0x482979), rgb(0x472a7a), rgb(0x472c7a),
    rgb(0x472d7b), rgb(0x472e7c), rgb(0x472f7d), rgb(0x46307e),
    rgb(0x46327e), rgb(0x46337f), rgb(0x463480), rgb(0x453581),
    rgb(0x453781), rgb(0x453882), rgb(0x443983), rgb(0x443a83),
    rgb(0x443b84), rgb(0x433d84), rgb(0x433e85), rgb(0x423f85),
    rgb(0x424086), rgb(0x424186), rgb(0x414287), rgb(0x414487),
    rgb(0x404588), rgb(0x404688), rgb(0x3f4788), rgb(0x3f4889),
    rgb(0x3e4989), rgb(0x3e4a89), rgb(0x3e4c8a), rgb(0x3d4d8a),
    rgb(0x3d4e8a), rgb(0x3c4f8a), rgb(0x3c508b), rgb(0x3b518b),
    rgb(0x3b528b), rgb(0x3a538b), rgb(0x3a548c), rgb(0x39558c),
    rgb(0x39568c), rgb(0x38588c), rgb(0x38598c), rgb(0x375a8c),
    rgb(0x375b8d), rgb(0x365c8d), rgb(0x365d8d), rgb(0x355e8d),
    rgb(0x355f8d), rgb(0x34608d), rgb(0x34618d), rgb(0x33628d),
    rgb(0x33638d), rgb(0x32648e), rgb(0x32658e), rgb(0x31668e),
    rgb(0x31678e), rgb(0x31688e), rgb(0x30698e), rgb(0x306a8e),
    rgb(0x2f6b8e), rgb(0x2f6c8e), rgb(0x2e6d8e), rgb(0x2e6e8e),
    rgb(0x2e6f8e), rgb(0x2d708e), rgb(0x2d718e), rgb(0x2c718e),
    rgb(0x2c728e), rgb(0x2c738e), rgb(0x2b748e), rgb(0x2b758e),
    rgb(0x2a768e), rgb(0x2a778e), rgb(0x2a788e), rgb(0x29798e),
    rgb(0x297a8e), rgb(0x297b8e), rgb(0x287c8e), rgb(0x287d8e),
    rgb(0x277e8e), rgb(0x277f8e), rgb(0x27808e), rgb(0x26818e),
    rgb(0x26828e), rgb(0x26828e), rgb(0x25838e), rgb(0x25848e),
    rgb(0x25858e), rgb(0x24868e), rgb(0x24878e), rgb(0x23888e),
    rgb(0x23898e), rgb(0x238a8d), rgb(0x228b8d), rgb(0x228c8d),
    rgb(0x228d8d), rgb(0x218e8d), rgb(0x218f8d), rgb(0x21908d),
    rgb(0x21918c), rgb(0x20928c), rgb(0x20928c), rgb(0x20938c),
    rgb(0x1f948c), rgb(0x1f958b), rgb(0x1f968b), rgb(0x1f978b),
    rgb(0x1f988b), rgb(0x1f998a), rgb(0x1f9a8a), rgb(0x1e9b8a),
    rgb(0x1e9c89), rgb(0x1e9d89), rgb(0x1f9e89), rgb(0x1f9f88),
    rgb(0x1fa088), rgb(0x1fa188), rgb(0x1fa187), rgb(0x1fa287),
    rgb(0x20a386), rgb(0x20a486), rgb(0x21a585), rgb(0x21a685),
    rgb(0x22a785), rgb(0x22a884), rgb(0x23a983), rgb(0x24aa83),
    rgb(0x25ab82), rgb(0x25ac82), rgb(0x26ad81), rgb(0x27ad81),
    rgb(0x28ae80), rgb(0x29af7f), rgb(0x2ab07f), rgb(0x2cb17e),
    rgb(0x2db27d), rgb(0x2eb37c), rgb(0x2fb47c), rgb(0x31b57b),
    rgb(0x32b67a), rgb(0x34b679), rgb(0x35b779), rgb(0x37b878),
    rgb(0x38b977), rgb(0x3aba76), rgb(0x3bbb75), rgb(0x3dbc74),
    rgb(0x3fbc73), rgb(0x40bd72), rgb(0x42be71), rgb(0x44bf70),
    rgb(0x46c06f), rgb(0x48c16e), rgb(0x4ac16d), rgb(0x4cc26c),
    rgb(0x4ec36b), rgb(0x50c46a), rgb(0x52c569), rgb(0x54c568),
    rgb(0x56c667), rgb(0x58c765), rgb(0x5ac864), rgb(0x5cc863),
    rgb(0x5ec962), rgb(0x60ca60), rgb(0x63cb5f), rgb(0x65cb5e),
    rgb(0x67cc5c), rgb(0x69cd5b), rgb(0x6ccd5a), rgb(0x6ece58),
    rgb(0x70cf57), rgb(0x73d056), rgb(0x75d054), rgb(0x77d153),
    rgb(0x7ad151), rgb(0x7cd250), rgb(0x7fd34e), rgb(0x81d34d),
    rgb(0x84d44b), rgb(0x86d549), rgb(0x89d548), rgb(0x8bd646),
    rgb(0x8ed645), rgb(0x90d743), rgb(0x93d741), rgb(0x95d840),
    rgb(0x98d83e), rgb(0x9bd93c), rgb(0x9dd93b), rgb(0xa0da39),
    rgb(0xa2da37), rgb(0xa5db36), rgb(0xa8db34), rgb(0xaadc32),
    rgb(0xaddc30), rgb(0xb0dd2f), rgb(0xb2dd2d), rgb(0xb5de2b),
    rgb(0xb8de29), rgb(0xbade28), rgb(0xbddf26), rgb(0xc0df25),
    rgb(0xc2df23), rgb(0xc5e021), rgb(0xc8e020), rgb(0xcae11f),
    rgb(0xcde11d), rgb(0xd0e11c), rgb(0xd2e21b), rgb(0xd5e21a),
    rgb(0xd8e219), rgb(0xdae319), rgb(0xdde318), rgb(0xdfe318),
    rgb(0xe2e418), rgb(0xe5e419), rgb(0xe7e419), rgb(0xeae51a),
    rgb(0xece51b), rgb(0xefe51c), rgb(0xf1e51d), rgb(0xf4e61e),
    rgb(0xf6e620), rgb(0xf8e621), rgb(0xfbe723), rgb(0xfde725),
];

/// Cividis, 256 entries
pub static CIVIDIS: [[f32; 3]; 256] = [
    rgb(0x002051), rgb(0x002152), rgb(0x002154), rgb(0x002256),
    rgb(0x002357), rgb(0x002359), rgb(0x00245a), rgb(0x00255b),
    rgb(0x00255c), rgb(0x00265e), rgb(0x00275f), rgb(0x002760),
    rgb(0x002861), rgb(0x002962), rgb(0x002a63), rgb(0x002a63),
    rgb(0x012b64), rgb(0x012c65), rgb(0x022c66), rgb(0x032d66),
    rgb(0x042e67), rgb(0x052e67), rgb(0x062f68), rgb(0x073069),
    rgb(0x083069), rgb(0x093169), rgb(0x0a326a), rgb(0x0b336a),
    rgb(0x0c336b), rgb(0x0d346b), rgb(0x0f356b), rgb(0x10356c),
    rgb(0x11366c), rgb(0x12376c), rgb(0x14376c), rgb(0x15386c),
    rgb(0x16396d), rgb(0x173a6d), rgb(0x193a6d), rgb(0x1a3b6d),
    rgb(0x1b3c6d), rgb(0x1d3c6d), rgb(0x1e3d6d), rgb(0x1f3e6d),
    rgb(0x213e6d), rgb(0x223f6d), rgb(0x23406d), rgb(0x25416d),
    rgb(0x26416d), rgb(0x28426d), rgb(0x29436d), rgb(0x2a436d),
    rgb(0x2c446d), rgb(0x2d456d), rgb(0x2e466d), rgb(0x30466d),
    rgb(0x31476d), rgb(0x33486d), rgb(0x34486d), rgb(0x35496d),
    rgb(0x374a6d), rgb(0x384b6d), rgb(0x394b6d), rgb(0x3b4c6d),
    rgb(0x3c4d6d), rgb(0x3d4d6d), rgb(0x3f4e6d), rgb(0x404f6d),
    rgb(0x41506d), rgb(0x43506d), rgb(0x44516d), rgb(0x45526d),
    rgb(0x47526d), rgb(0x48536d), rgb(0x49546d), rgb(0x4a556d),
    rgb(0x4c556d), rgb(0x4d566d), rgb(0x4e576d), rgb(0x4f576d),
    rgb(0x50586d), rgb(0x52596d), rgb(0x535a6d), rgb(0x545a6d),
    rgb(0x555b6d), rgb(0x565c6d), rgb(0x575d6d), rgb(0x595d6d),
    rgb(0x5a5e6e), rgb(0x5b5f6e), rgb(0x5c5f6e), rgb(0x5d606e),
    rgb(0x5e616e), rgb(0x5f626e), rgb(0x60626e), rgb(0x61636e),
    rgb(0x62646e), rgb(0x63656e), rgb(0x64656f), rgb(0x65666f),
    rgb(0x66676f), rgb(0x67676f), rgb(0x68686f), rgb(0x69696f),
    rgb(0x6a6a70), rgb(0x6b6a70), rgb(0x6c6b70), rgb(0x6d6c70),
    rgb(0x6e6d70), rgb(0x6f6d70), rgb(0x706e71), rgb(0x716f71),
    rgb(0x726f71), rgb(0x727071), rgb(0x737171), rgb(0x747272),
    rgb(0x757272), rgb(0x767372), rgb(0x777472), rgb(0x787572),
    rgb(0x787573), rgb(0x797673), rgb(0x7a7773), rgb(0x7b7873),
    rgb(0x7c7873), rgb(0x7d7974), rgb(0x7d7a74), rgb(0x7e7b74),
    rgb(0x7f7b74), rgb(0x807c74), rgb(0x817d75), rgb(0x827e75),
    rgb(0x827e75), rgb(0x837f75), rgb(0x848075), rgb(0x858176),
    rgb(0x868276), rgb(0x868276), rgb(0x878376), rgb(0x888476),
    rgb(0x898576), rgb(0x8a8577), rgb(0x8b8677), rgb(0x8b8777),
    rgb(0x8c8877), rgb(0x8d8877), rgb(0x8e8977), rgb(0x8f8a77),
    rgb(0x908b77), rgb(0x908c78), rgb(0x918c78), rgb(0x928d78),
    rgb(0x938e78), rgb(0x948f78), rgb(0x958f78), rgb(0x969078),
    rgb(0x969178), rgb(0x979278), rgb(0x989378), rgb(0x999378),
    rgb(0x9a9478), rgb(0x9b9578), rgb(0x9c9678), rgb(0x9d9778),
    rgb(0x9e9778), rgb(0x9f9878), rgb(0xa09978), rgb(0xa19a77),
    rgb(0xa29b77), rgb(0xa39c77), rgb(0xa49c77), rgb(0xa49d77),
    rgb(0xa59e77), rgb(0xa79f77), rgb(0xa8a076), rgb(0xa9a076),
    rgb(0xaaa176), rgb(0xaba276), rgb(0xaca375), rgb(0xada475),
    rgb(0xaea575), rgb(0xafa574), rgb(0xb0a674), rgb(0xb1a774),
    rgb(0xb2a873), rgb(0xb3a973), rgb(0xb4aa73), rgb(0xb6ab72),
    rgb(0xb7ab72), rgb(0xb8ac71), rgb(0xb9ad71), rgb(0xbaae71),
    rgb(0xbbaf70), rgb(0xbdb070), rgb(0xbeb16f), rgb(0xbfb16f),
    rgb(0xc0b26e), rgb(0xc1b36d), rgb(0xc3b46d), rgb(0xc4b56c),
    rgb(0xc5b66c), rgb(0xc6b76b), rgb(0xc7b86b), rgb(0xc9b86a),
    rgb(0xcab969), rgb(0xcbba69), rgb(0xccbb68), rgb(0xcebc67),
    rgb(0xcfbd67), rgb(0xd0be66), rgb(0xd1bf65), rgb(0xd3c064),
    rgb(0xd4c064), rgb(0xd5c163), rgb(0xd6c262), rgb(0xd8c361),
    rgb(0xd9c461), rgb(0xdac560), rgb(0xdbc65f), rgb(0xddc75e),
    rgb(0xdec85e), rgb(0xdfc95d), rgb(0xe0ca5c), rgb(0xe2cb5b),
    rgb(0xe3cc5a), rgb(0xe4cc59), rgb(0xe5cd59), rgb(0xe6ce58),
    rgb(0xe7cf57), rgb(0xe9d056), rgb(0xead155), rgb(0xebd255),
    rgb(0xecd354), rgb(0xedd453), rgb(0xeed552), rgb(0xefd651),
    rgb(0xf0d751), rgb(0xf1d850), rgb(0xf2d94f), rgb(0xf3da4e),
    rgb(0xf4db4e), rgb(0xf5dc4d), rgb(0xf5dd4c), rgb(0xf6de4b),
    rgb(0xf7df4b), rgb(0xf8e04a), rgb(0xf8e049), rgb(0xf9e149),
    rgb(0xfae248), rgb(0xfae348), rgb(0xfbe447), rgb(0xfbe546),
    rgb(0xfce646), rgb(0xfce746), rgb(0xfde845), rgb(0xfde945),
];

/// Twilight, 510 entries. Cyclic: the first and last entries are almost
/// identical.
///
/// Only the endpoints match matplotlib's published table. The rest are linear
/// blends between stops at eighths of the range.
// TODO replace with matplotlib's `_twilight_data` table
pub static TWILIGHT: [[f32; 3]; 510] = [
    [0.885750, 0.850009, 0.887974],
    [0.881960, 0.847739, 0.886800],
    [0.878170, 0.845470, 0.885627],
    [0.874379, 0.843200, 0.884453],
    [0.870589, 0.840930, 0.883279],
    [0.866799, 0.838661, 0.882106],
    [0.863009, 0.836391, 0.880932],
    [0.859219, 0.834121, 0.879758],
    [0.855429, 0.831851, 0.878585],
    [0.851638, 0.829582, 0.877411],
    [0.847848, 0.827312, 0.876237],
    [0.844058, 0.825042, 0.875064],
    [0.840268, 0.822773, 0.873890],
    [0.836478, 0.820503, 0.872716],
    [0.832688, 0.818233, 0.871543],
    [0.828897, 0.815964, 0.870369],
    [0.825107, 0.813694, 0.869195],
    [0.821317, 0.811424, 0.868022],
    [0.817527, 0.809155, 0.866848],
    [0.813737, 0.806885, 0.865674],
    [0.809946, 0.804615, 0.864501],
    [0.806156, 0.802346, 0.863327],
    [0.802366, 0.800076, 0.862154],
    [0.798576, 0.797806, 0.860980],
    [0.794786, 0.795536, 0.859806],
    [0.790996, 0.793267, 0.858633],
    [0.787205, 0.790997, 0.857459],
    [0.783415, 0.788727, 0.856285],
    [0.779625, 0.786458, 0.855112],
    [0.775835, 0.784188, 0.853938],
    [0.772045, 0.781918, 0.852764],
    [0.768255, 0.779649, 0.851591],
    [0.764464, 0.777379, 0.850417],
    [0.760674, 0.775109, 0.849243],
    [0.756884, 0.772840, 0.848070],
    [0.753094, 0.770570, 0.846896],
    [0.749304, 0.768300, 0.845722],
    [0.745513, 0.766030, 0.844549],
    [0.741723, 0.763761, 0.843375],
    [0.737933, 0.761491, 0.842201],
    [0.734143, 0.759221, 0.841028],
    [0.730353, 0.756952, 0.839854],
    [0.726563, 0.754682, 0.838680],
    [0.722772, 0.752412, 0.837507],
    [0.718982, 0.750143, 0.836333],
    [0.715192, 0.747873, 0.835159],
    [0.711402, 0.745603, 0.833986],
    [0.707612, 0.743334, 0.832812],
    [0.703822, 0.741064, 0.831638],
    [0.700031, 0.738794, 0.830465],
    [0.696241, 0.736525, 0.829291],
    [0.692451, 0.734255, 0.828117],
    [0.688661, 0.731985, 0.826944],
    [0.684871, 0.729715, 0.825770],
    [0.681080, 0.727446, 0.824596],
    [0.677290, 0.725176, 0.823423],
    [0.673500, 0.722906, 0.822249],
    [0.669710, 0.720637, 0.821075],
    [0.665920, 0.718367, 0.819902],
    [0.662130, 0.716097, 0.818728],
    [0.658339, 0.713828, 0.817555],
    [0.654549, 0.711558, 0.816381],
    [0.650759, 0.709288, 0.815207],
    [0.646969, 0.707019, 0.814034],
    [0.643077, 0.704394, 0.812978],
    [0.639016, 0.701178, 0.812118],
    [0.634954, 0.697963, 0.811258],
    [0.630893, 0.694747, 0.810398],
    [0.626832, 0.691531, 0.809539],
    [0.622771, 0.688316, 0.808679],
    [0.618709, 0.685100, 0.807819],
    [0.614648, 0.681884, 0.806960],
    [0.610587, 0.678668, 0.806100],
    [0.606525, 0.675453, 0.805240],
    [0.602464, 0.672237, 0.804380],
    [0.598403, 0.669021, 0.803521],
    [0.594341, 0.665806, 0.802661],
    [0.590280, 0.662590, 0.801801],
    [0.586219, 0.659374, 0.800941],
    [0.582158, 0.656158, 0.800082],
    [0.578096, 0.652943, 0.799222],
    [0.574035, 0.649727, 0.798362],
    [0.569974, 0.646511, 0.797503],
    [0.565912, 0.643295, 0.796643],
    [0.561851, 0.640080, 0.795783],
    [0.557790, 0.636864, 0.794923],
    [0.553728, 0.633648, 0.794064],
    [0.549667, 0.630433, 0.793204],
    [0.545606, 0.627217, 0.792344],
    [0.541545, 0.624001, 0.791484],
    [0.537483, 0.620785, 0.790625],
    [0.533422, 0.617570, 0.789765],
    [0.529361, 0.614354, 0.788905],
    [0.525299, 0.611138, 0.788046],
    [0.521238, 0.607923, 0.787186],
    [0.517177, 0.604707, 0.786326],
    [0.513116, 0.601491, 0.785466],
    [0.509054, 0.598275, 0.784607],
    [0.504993, 0.595060, 0.783747],
    [0.500932, 0.591844, 0.782887],
    [0.496870, 0.588628, 0.782028],
    [0.492809, 0.585413, 0.781168],
    [0.488748, 0.582197, 0.780308],
    [0.484686, 0.578981, 0.779448],
    [0.480625, 0.575765, 0.778589],
    [0.476564, 0.572550, 0.777729],
    [0.472503, 0.569334, 0.776869],
    [0.468441, 0.566118, 0.776009],
    [0.464380, 0.562903, 0.775150],
    [0.460319, 0.559687, 0.774290],
    [0.456257, 0.556471, 0.773430],
    [0.452196, 0.553255, 0.772571],
    [0.448135, 0.550040, 0.771711],
    [0.444073, 0.546824, 0.770851],
    [0.440012, 0.543608, 0.769991],
    [0.435951, 0.540393, 0.769132],
    [0.431890, 0.537177, 0.768272],
    [0.427828, 0.533961, 0.767412],
    [0.423767, 0.530745, 0.766552],
    [0.419706, 0.527530, 0.765693],
    [0.415644, 0.524314, 0.764833],
    [0.411583, 0.521098, 0.763973],
    [0.407522, 0.517883, 0.763114],
    [0.403461, 0.514667, 0.762254],
    [0.399399, 0.511451, 0.761394],
    [0.395338, 0.508235, 0.760534],
    [0.391277, 0.505020, 0.759675],
    [0.387215, 0.501804, 0.758815],
    [0.385929, 0.497793, 0.756683],
    [0.385567, 0.493516, 0.754128],
    [0.385206, 0.489239, 0.751572],
    [0.384844, 0.484963, 0.749017],
    [0.384483, 0.480686, 0.746461],
    [0.384121, 0.476409, 0.743905],
    [0.383760, 0.472133, 0.741350],
    [0.383398, 0.467856, 0.738794],
    [0.383037, 0.463580, 0.736239],
    [0.382675, 0.459303, 0.733683],
    [0.382314, 0.455026, 0.731127],
    [0.381952, 0.450750, 0.728572],
    [0.381591, 0.446473, 0.726016],
    [0.381229, 0.442196, 0.723461],
    [0.380868, 0.437920, 0.720905],
    [0.380506, 0.433643, 0.718349],
    [0.380145, 0.429367, 0.715794],
    [0.379783, 0.425090, 0.713238],
    [0.379422, 0.420813, 0.710683],
    [0.379061, 0.416537, 0.708127],
    [0.378699, 0.412260, 0.705571],
    [0.378338, 0.407983, 0.703016],
    [0.377976, 0.403707, 0.700460],
    [0.377615, 0.399430, 0.697905],
    [0.377253, 0.395154, 0.695349],
    [0.376892, 0.390877, 0.692793],
    [0.376530, 0.386600, 0.690238],
    [0.376169, 0.382324, 0.687682],
    [0.375807, 0.378047, 0.685127],
    [0.375446, 0.373771, 0.682571],
    [0.375084, 0.369494, 0.680015],
    [0.374723, 0.365217, 0.677460],
    [0.374361, 0.360941, 0.674904],
    [0.374000, 0.356664, 0.672349],
    [0.373638, 0.352387, 0.669793],
    [0.373277, 0.348111, 0.667237],
    [0.372915, 0.343834, 0.664682],
    [0.372554, 0.339558, 0.662126],
    [0.372192, 0.335281, 0.659571],
    [0.371831, 0.331004, 0.657015],
    [0.371469, 0.326728, 0.654459],
    [0.371108, 0.322451, 0.651904],
    [0.370746, 0.318174, 0.649348],
    [0.370385, 0.313898, 0.646793],
    [0.370023, 0.309621, 0.644237],
    [0.369662, 0.305345, 0.641681],
    [0.369300, 0.301068, 0.639126],
    [0.368939, 0.296791, 0.636570],
    [0.368577, 0.292515, 0.634015],
    [0.368216, 0.288238, 0.631459],
    [0.367854, 0.283961, 0.628903],
    [0.367493, 0.279685, 0.626348],
    [0.367131, 0.275408, 0.623792],
    [0.366770, 0.271132, 0.621237],
    [0.366408, 0.266855, 0.618681],
    [0.366047, 0.262578, 0.616125],
    [0.365685, 0.258302, 0.613570],
    [0.365324, 0.254025, 0.611014],
    [0.364962, 0.249749, 0.608459],
    [0.364601, 0.245472, 0.605903],
    [0.364239, 0.241195, 0.603347],
    [0.363878, 0.236919, 0.600792],
    [0.363516, 0.232642, 0.598236],
    [0.362855, 0.228602, 0.595252],
    [0.360093, 0.226216, 0.589265],
    [0.357332, 0.223830, 0.583278],
    [0.354570, 0.221444, 0.577292],
    [0.351809, 0.219058, 0.571305],
    [0.349047, 0.216672, 0.565318],
    [0.346286, 0.214287, 0.559332],
    [0.343524, 0.211901, 0.553345],
    [0.340763, 0.209515, 0.547359],
    [0.338001, 0.207129, 0.541372],
    [0.335240, 0.204743, 0.535385],
    [0.332478, 0.202357, 0.529399],
    [0.329717, 0.199972, 0.523412],
    [0.326955, 0.197586, 0.517425],
    [0.324194, 0.195200, 0.511439],
    [0.321432, 0.192814, 0.505452],
    [0.318671, 0.190428, 0.499465],
    [0.315909, 0.188042, 0.493479],
    [0.313148, 0.185656, 0.487492],
    [0.310386, 0.183271, 0.481506],
    [0.307625, 0.180885, 0.475519],
    [0.304863, 0.178499, 0.469532],
    [0.302102, 0.176113, 0.463546],
    [0.299340, 0.173727, 0.457559],
    [0.296579, 0.171341, 0.451572],
    [0.293817, 0.168955, 0.445586],
    [0.291056, 0.166570, 0.439599],
    [0.288294, 0.164184, 0.433612],
    [0.285533, 0.161798, 0.427626],
    [0.282772, 0.159412, 0.421639],
    [0.280010, 0.157026, 0.415652],
    [0.277249, 0.154640, 0.409666],
    [0.274487, 0.152254, 0.403679],
    [0.271726, 0.149869, 0.397693],
    [0.268964, 0.147483, 0.391706],
    [0.266203, 0.145097, 0.385719],
    [0.263441, 0.142711, 0.379733],
    [0.260680, 0.140325, 0.373746],
    [0.257918, 0.137939, 0.367759],
    [0.255157, 0.135553, 0.361773],
    [0.252395, 0.133168, 0.355786],
    [0.249634, 0.130782, 0.349799],
    [0.246872, 0.128396, 0.343813],
    [0.244111, 0.126010, 0.337826],
    [0.241349, 0.123624, 0.331839],
    [0.238588, 0.121238, 0.325853],
    [0.235826, 0.118852, 0.319866],
    [0.233065, 0.116467, 0.313880],
    [0.230303, 0.114081, 0.307893],
    [0.227542, 0.111695, 0.301906],
    [0.224780, 0.109309, 0.295920],
    [0.222019, 0.106923, 0.289933],
    [0.219257, 0.104537, 0.283946],
    [0.216496, 0.102151, 0.277960],
    [0.213734, 0.099766, 0.271973],
    [0.210973, 0.097380, 0.265986],
    [0.208211, 0.094994, 0.260000],
    [0.205450, 0.092608, 0.254013],
    [0.202688, 0.090222, 0.248027],
    [0.199927, 0.087836, 0.242040],
    [0.197165, 0.085450, 0.236053],
    [0.194404, 0.083065, 0.230067],
    [0.191642, 0.080679, 0.224080],
    [0.188881, 0.078293, 0.218093],
    [0.189608, 0.077572, 0.215774],
    [0.193825, 0.078517, 0.217123],
    [0.198042, 0.079461, 0.218471],
    [0.202259, 0.080406, 0.219820],
    [0.206476, 0.081351, 0.221168],
    [0.210693, 0.082295, 0.222517],
    [0.214910, 0.083240, 0.223865],
    [0.219127, 0.084184, 0.225214],
    [0.223344, 0.085129, 0.226562],
    [0.227561, 0.086074, 0.227911],
    [0.231777, 0.087018, 0.229260],
    [0.235994, 0.087963, 0.230608],
    [0.240211, 0.088907, 0.231957],
    [0.244428, 0.089852, 0.233305],
    [0.248645, 0.090797, 0.234654],
    [0.252862, 0.091741, 0.236002],
    [0.257079, 0.092686, 0.237351],
    [0.261296, 0.093630, 0.238699],
    [0.265513, 0.094575, 0.240048],
    [0.269729, 0.095520, 0.241396],
    [0.273946, 0.096464, 0.242745],
    [0.278163, 0.097409, 0.244093],
    [0.282380, 0.098353, 0.245442],
    [0.286597, 0.099298, 0.246790],
    [0.290814, 0.100243, 0.248139],
    [0.295031, 0.101187, 0.249487],
    [0.299248, 0.102132, 0.250836],
    [0.303465, 0.103076, 0.252184],
    [0.307682, 0.104021, 0.253533],
    [0.311898, 0.104966, 0.254882],
    [0.316115, 0.105910, 0.256230],
    [0.320332, 0.106855, 0.257579],
    [0.324549, 0.107799, 0.258927],
    [0.328766, 0.108744, 0.260276],
    [0.332983, 0.109689, 0.261624],
    [0.337200, 0.110633, 0.262973],
    [0.341417, 0.111578, 0.264321],
    [0.345634, 0.112522, 0.265670],
    [0.349850, 0.113467, 0.267018],
    [0.354067, 0.114412, 0.268367],
    [0.358284, 0.115356, 0.269715],
    [0.362501, 0.116301, 0.271064],
    [0.366718, 0.117245, 0.272412],
    [0.370935, 0.118190, 0.273761],
    [0.375152, 0.119135, 0.275109],
    [0.379369, 0.120079, 0.276458],
    [0.383586, 0.121024, 0.277806],
    [0.387803, 0.121968, 0.279155],
    [0.392019, 0.122913, 0.280504],
    [0.396236, 0.123858, 0.281852],
    [0.400453, 0.124802, 0.283201],
    [0.404670, 0.125747, 0.284549],
    [0.408887, 0.126691, 0.285898],
    [0.413104, 0.127636, 0.287246],
    [0.417321, 0.128581, 0.288595],
    [0.421538, 0.129525, 0.289943],
    [0.425755, 0.130470, 0.291292],
    [0.429972, 0.131414, 0.292640],
    [0.434188, 0.132359, 0.293989],
    [0.438405, 0.133304, 0.295337],
    [0.442622, 0.134248, 0.296686],
    [0.446839, 0.135193, 0.298034],
    [0.451056, 0.136137, 0.299383],
    [0.455273, 0.137082, 0.300731],
    [0.459315, 0.140039, 0.300703],
    [0.463332, 0.143283, 0.300479],
    [0.467350, 0.146527, 0.300254],
    [0.471367, 0.149771, 0.300029],
    [0.475384, 0.153015, 0.299804],
    [0.479402, 0.156259, 0.299580],
    [0.483419, 0.159503, 0.299355],
    [0.487436, 0.162747, 0.299130],
    [0.491453, 0.165991, 0.298905],
    [0.495471, 0.169235, 0.298681],
    [0.499488, 0.172479, 0.298456],
    [0.503505, 0.175723, 0.298231],
    [0.507523, 0.178967, 0.298006],
    [0.511540, 0.182211, 0.297782],
    [0.515557, 0.185455, 0.297557],
    [0.519574, 0.188699, 0.297332],
    [0.523592, 0.191943, 0.297107],
    [0.527609, 0.195187, 0.296883],
    [0.531626, 0.198431, 0.296658],
    [0.535644, 0.201675, 0.296433],
    [0.539661, 0.204919, 0.296208],
    [0.543678, 0.208163, 0.295983],
    [0.547695, 0.211407, 0.295759],
    [0.551713, 0.214651, 0.295534],
    [0.555730, 0.217895, 0.295309],
    [0.559747, 0.221139, 0.295084],
    [0.563765, 0.224383, 0.294860],
    [0.567782, 0.227627, 0.294635],
    [0.571799, 0.230871, 0.294410],
    [0.575817, 0.234115, 0.294185],
    [0.579834, 0.237359, 0.293961],
    [0.583851, 0.240603, 0.293736],
    [0.587868, 0.243847, 0.293511],
    [0.591886, 0.247091, 0.293286],
    [0.595903, 0.250335, 0.293062],
    [0.599920, 0.253579, 0.292837],
    [0.603938, 0.256823, 0.292612],
    [0.607955, 0.260067, 0.292387],
    [0.611972, 0.263311, 0.292163],
    [0.615989, 0.266555, 0.291938],
    [0.620007, 0.269799, 0.291713],
    [0.624024, 0.273043, 0.291488],
    [0.628041, 0.276287, 0.291264],
    [0.632059, 0.279531, 0.291039],
    [0.636076, 0.282775, 0.290814],
    [0.640093, 0.286019, 0.290589],
    [0.644110, 0.289263, 0.290365],
    [0.648128, 0.292507, 0.290140],
    [0.652145, 0.295751, 0.289915],
    [0.656162, 0.298995, 0.289690],
    [0.660180, 0.302239, 0.289466],
    [0.664197, 0.305483, 0.289241],
    [0.668214, 0.308727, 0.289016],
    [0.672231, 0.311971, 0.288791],
    [0.676249, 0.315215, 0.288567],
    [0.680266, 0.318459, 0.288342],
    [0.684283, 0.321703, 0.288117],
    [0.688301, 0.324947, 0.287892],
    [0.692318, 0.328191, 0.287668],
    [0.696335, 0.331435, 0.287443],
    [0.700352, 0.334679, 0.287218],
    [0.704370, 0.337923, 0.286993],
    [0.708387, 0.341167, 0.286769],
    [0.711808, 0.344712, 0.287627],
    [0.713439, 0.349160, 0.291734],
    [0.715071, 0.353608, 0.295840],
    [0.716702, 0.358056, 0.299947],
    [0.718334, 0.362504, 0.304054],
    [0.719965, 0.366952, 0.308161],
    [0.721596, 0.371400, 0.312268],
    [0.723228, 0.375848, 0.316375],
    [0.724859, 0.380295, 0.320482],
    [0.726491, 0.384743, 0.324589],
    [0.728122, 0.389191, 0.328695],
    [0.729754, 0.393639, 0.332802],
    [0.731385, 0.398087, 0.336909],
    [0.733017, 0.402535, 0.341016],
    [0.734648, 0.406983, 0.345123],
    [0.736279, 0.411431, 0.349230],
    [0.737911, 0.415879, 0.353337],
    [0.739542, 0.420327, 0.357444],
    [0.741174, 0.424775, 0.361550],
    [0.742805, 0.429223, 0.365657],
    [0.744437, 0.433671, 0.369764],
    [0.746068, 0.438119, 0.373871],
    [0.747699, 0.442567, 0.377978],
    [0.749331, 0.447015, 0.382085],
    [0.750962, 0.451462, 0.386192],
    [0.752594, 0.455910, 0.390299],
    [0.754225, 0.460358, 0.394406],
    [0.755857, 0.464806, 0.398512],
    [0.757488, 0.469254, 0.402619],
    [0.759119, 0.473702, 0.406726],
    [0.760751, 0.478150, 0.410833],
    [0.762382, 0.482598, 0.414940],
    [0.764014, 0.487046, 0.419047],
    [0.765645, 0.491494, 0.423154],
    [0.767277, 0.495942, 0.427261],
    [0.768908, 0.500390, 0.431367],
    [0.770539, 0.504838, 0.435474],
    [0.772171, 0.509286, 0.439581],
    [0.773802, 0.513734, 0.443688],
    [0.775434, 0.518182, 0.447795],
    [0.777065, 0.522629, 0.451902],
    [0.778697, 0.527077, 0.456009],
    [0.780328, 0.531525, 0.460116],
    [0.781960, 0.535973, 0.464222],
    [0.783591, 0.540421, 0.468329],
    [0.785222, 0.544869, 0.472436],
    [0.786854, 0.549317, 0.476543],
    [0.788485, 0.553765, 0.480650],
    [0.790117, 0.558213, 0.484757],
    [0.791748, 0.562661, 0.488864],
    [0.793380, 0.567109, 0.492971],
    [0.795011, 0.571557, 0.497077],
    [0.796642, 0.576005, 0.501184],
    [0.798274, 0.580453, 0.505291],
    [0.799905, 0.584901, 0.509398],
    [0.801537, 0.589349, 0.513505],
    [0.803168, 0.593796, 0.517612],
    [0.804800, 0.598244, 0.521719],
    [0.806431, 0.602692, 0.525826],
    [0.808062, 0.607140, 0.529932],
    [0.809694, 0.611588, 0.534039],
    [0.811325, 0.616036, 0.538146],
    [0.812957, 0.620484, 0.542253],
    [0.814588, 0.624932, 0.546360],
    [0.815893, 0.628795, 0.551219],
    [0.817001, 0.632306, 0.556528],
    [0.818109, 0.635818, 0.561838],
    [0.819217, 0.639329, 0.567147],
    [0.820326, 0.642841, 0.572457],
    [0.821434, 0.646352, 0.577767],
    [0.822542, 0.649864, 0.583076],
    [0.823650, 0.653376, 0.588386],
    [0.824759, 0.656887, 0.593696],
    [0.825867, 0.660399, 0.599005],
    [0.826975, 0.663910, 0.604315],
    [0.828083, 0.667422, 0.609624],
    [0.829192, 0.670933, 0.614934],
    [0.830300, 0.674445, 0.620244],
    [0.831408, 0.677956, 0.625553],
    [0.832516, 0.681468, 0.630863],
    [0.833625, 0.684979, 0.636173],
    [0.834733, 0.688491, 0.641482],
    [0.835841, 0.692003, 0.646792],
    [0.836949, 0.695514, 0.652101],
    [0.838058, 0.699026, 0.657411],
    [0.839166, 0.702537, 0.662721],
    [0.840274, 0.706049, 0.668030],
    [0.841382, 0.709560, 0.673340],
    [0.842490, 0.713072, 0.678650],
    [0.843599, 0.716583, 0.683959],
    [0.844707, 0.720095, 0.689269],
    [0.845815, 0.723606, 0.694578],
    [0.846923, 0.727118, 0.699888],
    [0.848032, 0.730629, 0.705198],
    [0.849140, 0.734141, 0.710507],
    [0.850248, 0.737653, 0.715817],
    [0.851356, 0.741164, 0.721127],
    [0.852465, 0.744676, 0.726436],
    [0.853573, 0.748187, 0.731746],
    [0.854681, 0.751699, 0.737055],
    [0.855789, 0.755210, 0.742365],
    [0.856898, 0.758722, 0.747675],
    [0.858006, 0.762233, 0.752984],
    [0.859114, 0.765745, 0.758294],
    [0.860222, 0.769256, 0.763604],
    [0.861331, 0.772768, 0.768913],
    [0.862439, 0.776280, 0.774223],
    [0.863547, 0.779791, 0.779532],
    [0.864655, 0.783303, 0.784842],
    [0.865764, 0.786814, 0.790152],
    [0.866872, 0.790326, 0.795461],
    [0.867980, 0.793837, 0.800771],
    [0.869088, 0.797349, 0.806081],
    [0.870197, 0.800860, 0.811390],
    [0.871305, 0.804372, 0.816700],
    [0.872413, 0.807883, 0.822009],
    [0.873521, 0.811395, 0.827319],
    [0.874630, 0.814907, 0.832629],
    [0.875738, 0.818418, 0.837938],
    [0.876846, 0.821930, 0.843248],
    [0.877954, 0.825441, 0.848558],
    [0.879063, 0.828953, 0.853867],
    [0.880171, 0.832464, 0.859177],
    [0.881279, 0.835976, 0.864486],
    [0.882387, 0.839487, 0.869796],
    [0.883496, 0.842999, 0.875106],
    [0.884604, 0.846510, 0.880415],
    [0.885712, 0.850022, 0.885725],
];
