flag_mask! {
    /// Card setting fixed at personalization
    flag Setting;
    /// Set of [`Setting`] flags
    mask SettingsMask(u32);
    {
        /// Wallet can be purged and created again
        IsReusable = 0x0000_0001 => "Reusable",
        /// Card must be activated before use
        UseActivation = 0x0000_0002 => "Use activation",
        /// Wallet cannot be purged
        ProhibitPurgeWallet = 0x0000_0004 => "Prohibit purge wallet",
        /// Card can be blocked
        UseBlock = 0x0000_0008 => "Use block",
        /// PIN1 can be changed
        AllowSetPin1 = 0x0000_0010 => "Allow set PIN1",
        /// PIN2 can be changed
        AllowSetPin2 = 0x0000_0020 => "Allow set PIN2",
        /// CVC is required
        UseCvc = 0x0000_0040 => "Use CVC",
        /// Default PIN1 is rejected
        ProhibitDefaultPin1 = 0x0000_0080 => "Prohibit default PIN1",
        /// One command per NFC tap
        UseOneCommandAtTime = 0x0000_0100 => "Use one command at time",
        /// NDEF is exposed
        UseNdef = 0x0000_0200 => "Use NDEF",
        /// NDEF content is dynamic
        UseDynamicNdef = 0x0000_0400 => "Use dynamic NDEF",
        /// Security delay grows with failed attempts
        SmartSecurityDelay = 0x0000_0800 => "Smart security delay",
        /// Unencrypted exchange is allowed
        AllowUnencrypted = 0x0000_1000 => "Allow unencrypted",
        /// Fast encryption is allowed
        AllowFastEncryption = 0x0000_2000 => "Allow fast encryption",
        /// Issuer data carries a replay counter
        ProtectIssuerDataAgainstReplay = 0x0000_4000 => "Protect issuer data against replay",
        /// Blockchain can be chosen after personalization
        AllowSelectBlockchain = 0x0000_8000 => "Allow select blockchain",
        /// NDEF is not precomputed
        DisablePrecomputedNdef = 0x0001_0000 => "Disable precomputed NDEF",
        /// Issuer validation skips the security delay
        SkipSecurityDelayIfValidatedByIssuer = 0x0002_0000 => "Skip security delay if validated by issuer",
        /// Issuer validation skips the PIN2 and CVC checks
        SkipCheckPin2CvcIfValidatedByIssuer = 0x0004_0000 => "Skip PIN2/CVC check if validated by issuer",
        /// A linked terminal skips the security delay
        SkipSecurityDelayIfValidatedByLinkedTerminal = 0x0008_0000 => "Skip security delay if validated by linked terminal",
        /// Issuer extra data cannot be overwritten
        RestrictOverwriteIssuerExtraData = 0x0010_0000 => "Restrict overwrite issuer extra data",
        /// Terminal must sign transactions
        RequireTermTxSignature = 0x0100_0000 => "Require terminal transaction signature",
        /// Terminal must present a signed certificate
        RequireTermCertSignature = 0x0200_0000 => "Require terminal certificate signature",
        /// PIN3 is checked on the card
        CheckPin3OnCard = 0x0400_0000 => "Check PIN3 on card",
    }
}
