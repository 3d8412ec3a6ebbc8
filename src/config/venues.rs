/// Grounds accepted by the external score predictor.
///
/// The predictor looks up a per-venue scoring average, so a name outside
/// this list has no average and cannot be predicted.
pub const VENUES: &[&str] = &[
    "M. A. Chidambaram Stadium, Chennai",
    "Arun Jaitley Stadium, Delhi",
    "Narendra Modi Stadium, Ahmedabad",
    "Eden Gardens, Kolkata",
    "Ekana Cricket Stadium, Lucknow",
    "Wankhede Stadium, Mumbai",
    "Punjab Cricket Association Stadium, Mohali",
    "Sawai Mansingh Stadium, Jaipur",
    "M. Chinnaswamy Stadium, Bangalore",
    "Rajiv Gandhi International Cricket Stadium, Hyderabad",
    "Dr. Y.S. Rajasekhara Reddy ACA-VDCA Cricket Stadium",
];

pub fn is_known_venue(name: &str) -> bool {
    VENUES.iter().any(|venue| *venue == name.trim())
}
