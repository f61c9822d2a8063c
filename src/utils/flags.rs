/// Options gathered from the command line before the GUI starts.
#[derive(Debug, Clone)]
pub struct Flags {
    pub endpoint: String,
    pub camera_index: u32,
}
