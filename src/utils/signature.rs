pub fn get_signature(version: &str) -> String {
    format!(
        r#"
   _______                   
  |  ___  |                 📦 Stable Builds (channel version bumper)
  | |___| |__               
  |_______|  |              Bumps the alpha and bravo channels in stable-builds.yml
     |_______|              
                            v{}
"#,
        version
    )
}
