//! tests/registration/styles.rs

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use quickcheck::{Arbitrary, Gen};
use rand::rngs::StdRng;
use rand::SeedableRng;
use signup::registration::{create_user, CompositionStyle, RegistrationForm};

/// Raw input that is sometimes valid and sometimes not, so both channels
/// of the pipeline get exercised.
#[derive(Debug, Clone)]
struct RegistrationFixture(RegistrationForm);

impl Arbitrary for RegistrationFixture {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
        let name: String = if bool::arbitrary(g) {
            Name().fake_with_rng(&mut rng)
        } else {
            String::arbitrary(g)
        };
        let email: String = if bool::arbitrary(g) {
            SafeEmail().fake_with_rng(&mut rng)
        } else {
            String::arbitrary(g)
        };
        let mut password = String::arbitrary(g);
        if bool::arbitrary(g) {
            password.push('!');
        }
        Self(RegistrationForm::new(&name, &email, &password))
    }
}

#[quickcheck_macros::quickcheck]
fn all_styles_agree(fixture: RegistrationFixture) -> bool {
    let reference = create_user(CompositionStyle::Branching, fixture.0.clone());
    CompositionStyle::ALL
        .iter()
        .all(|style| create_user(*style, fixture.0.clone()) == reference)
}

#[quickcheck_macros::quickcheck]
fn styles_agree_with_try_from(fixture: RegistrationFixture) -> bool {
    let expected: Result<_, _> = signup::domain::User::try_from(fixture.0.clone());
    CompositionStyle::ALL
        .iter()
        .all(|style| create_user(*style, fixture.0.clone()).into_result() == expected)
}
