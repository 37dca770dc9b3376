use lazy_static::lazy_static;
use num_bigint::BigUint;

/// Public exponent used by the bundled demonstration.
pub const CHALLENGE_EXPONENT: u32 = 3;

lazy_static! {
    /// RSA modulus of the bundled demonstration, an 893-bit capture from a
    /// practice challenge that shipped `e = 3`.
    pub static ref CHALLENGE_MODULUS: BigUint = BigUint::parse_bytes(
        concat!(
            "6528060431134312098979986223024489565526932471806448564536469573046",
            "2093884132866862783900959153839493828194832026289924937797725669992",
            "1394812830511547181882839043654414361801527073771468092147856988826",
            "8839827028564639193248324096339581689662962043645269409315691045637",
            "1",
        )
        .as_bytes(),
        10,
    )
    .expect("challenge modulus is a valid decimal literal");

    /// Ciphertext of the demonstration flag under `CHALLENGE_MODULUS`. The
    /// flag is short enough that cubing it never wraps the modulus, so the
    /// direct root attack applies.
    pub static ref CHALLENGE_CIPHERTEXT: BigUint = BigUint::parse_bytes(
        concat!(
            "2105494729694667916739987750112563738977611810057656441132520052340",
            "1102958676707268415423052861061619846986950134258116091140148597757",
            "1894961602134202071727351696988146868791140125215957018579651592825",
            "19715429",
        )
        .as_bytes(),
        10,
    )
    .expect("challenge ciphertext is a valid decimal literal");
}
