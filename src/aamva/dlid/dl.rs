use super::data_elements_enum;

data_elements_enum! {
    /// Data elements of the driver license (`DL`) subfile.
    ///
    /// Identifiers follow the AAMVA DL/ID Card Design Standard (2020),
    /// annex D.
    pub enum DlElement {
        /// Customer ID number (DAQ).
        CustomerIdNumber: b"DAQ",

        /// Customer family name (DCS).
        CustomerFamilyName: b"DCS",

        /// Family name truncation (DDE).
        FamilyNameTruncation: b"DDE",

        /// Customer first name (DAC).
        CustomerFirstName: b"DAC",

        /// First name truncation (DDF).
        FirstNameTruncation: b"DDF",

        /// Customer middle name(s) (DAD).
        CustomerMiddleName: b"DAD",

        /// Middle name truncation (DDG).
        MiddleNameTruncation: b"DDG",

        /// Jurisdiction-specific vehicle class (DCA).
        VehicleClass: b"DCA",

        /// Jurisdiction-specific restriction codes (DCB).
        RestrictionCodes: b"DCB",

        /// Jurisdiction-specific endorsement codes (DCD).
        EndorsementCodes: b"DCD",

        /// Document issue date (DBD).
        DocumentIssueDate: b"DBD",

        /// Date of birth (DBB).
        DateOfBirth: b"DBB",

        /// Document expiration date (DBA).
        DocumentExpirationDate: b"DBA",

        /// Sex, see [`format_sex`](crate::aamva::format::format_sex) (DBC).
        Sex: b"DBC",

        /// Height, see [`format_height`](crate::aamva::format::format_height)
        /// (DAU).
        Height: b"DAU",

        /// Eye color, see
        /// [`eye_color_code`](crate::aamva::format::eye_color_code) (DAY).
        EyeColor: b"DAY",

        /// Address street 1 (DAG).
        AddressStreet1: b"DAG",

        /// Address city (DAI).
        AddressCity: b"DAI",

        /// Address jurisdiction code (DAJ).
        AddressJurisdictionCode: b"DAJ",

        /// Address postal code, see
        /// [`format_zip`](crate::aamva::format::format_zip) (DAK).
        AddressPostalCode: b"DAK",

        /// Document discriminator (DCF).
        DocumentDiscriminator: b"DCF",

        /// Country identification (DCG).
        CountryIdentification: b"DCG",

        /// Address street 2 (DAH).
        AddressStreet2: b"DAH",

        /// Weight in pounds, see
        /// [`format_weight`](crate::aamva::format::format_weight) (DAW).
        WeightInPounds: b"DAW",

        /// Weight in kilograms (DAX).
        WeightInKilograms: b"DAX",

        /// Hair color, see
        /// [`hair_color_code`](crate::aamva::format::hair_color_code) (DAZ).
        HairColor: b"DAZ",

        /// Place of birth (DCI).
        PlaceOfBirth: b"DCI",

        /// Audit information (DCJ).
        AuditInformation: b"DCJ",

        /// Inventory control number (DCK).
        InventoryControlNumber: b"DCK",

        /// Alias family name (DBN).
        AkaFamilyName: b"DBN",

        /// Alias given name (DBG).
        AkaGivenName: b"DBG",

        /// Alias suffix (DBS).
        AkaSuffixName: b"DBS",

        /// Name suffix (DCU).
        NameSuffix: b"DCU",

        /// Weight range (DCE).
        WeightRange: b"DCE",

        /// Race or ethnicity (DCL).
        RaceOrEthnicity: b"DCL",

        /// Standard vehicle classification (DCM).
        StandardVehicleClass: b"DCM",

        /// Standard endorsement code (DCN).
        StandardEndorsementCode: b"DCN",

        /// Standard restriction code (DCO).
        StandardRestrictionCode: b"DCO",

        /// Vehicle class description (DCP).
        VehicleClassDescription: b"DCP",

        /// Endorsement code description (DCQ).
        EndorsementCodeDescription: b"DCQ",

        /// Restriction code description (DCR).
        RestrictionCodeDescription: b"DCR",

        /// Compliance type (DDA).
        ComplianceType: b"DDA",

        /// Card revision date (DDB).
        CardRevisionDate: b"DDB",

        /// Hazmat endorsement expiration date (DDC).
        HazmatEndorsementExpirationDate: b"DDC",

        /// Limited duration document indicator (DDD).
        LimitedDurationDocumentIndicator: b"DDD",

        /// Under 18 until (DDH).
        Under18Until: b"DDH",

        /// Under 19 until (DDI).
        Under19Until: b"DDI",

        /// Under 21 until (DDJ).
        Under21Until: b"DDJ",

        /// Organ donor indicator (DDK).
        OrganDonorIndicator: b"DDK",

        /// Veteran indicator (DDL).
        VeteranIndicator: b"DDL"
    }
}

impl DlElement {
    /// Elements every `DL` subfile must carry.
    pub const MANDATORY: [Self; 22] = [
        Self::CustomerIdNumber,
        Self::CustomerFamilyName,
        Self::FamilyNameTruncation,
        Self::CustomerFirstName,
        Self::FirstNameTruncation,
        Self::CustomerMiddleName,
        Self::MiddleNameTruncation,
        Self::VehicleClass,
        Self::RestrictionCodes,
        Self::EndorsementCodes,
        Self::DocumentIssueDate,
        Self::DateOfBirth,
        Self::DocumentExpirationDate,
        Self::Sex,
        Self::Height,
        Self::EyeColor,
        Self::AddressStreet1,
        Self::AddressCity,
        Self::AddressJurisdictionCode,
        Self::AddressPostalCode,
        Self::DocumentDiscriminator,
        Self::CountryIdentification,
    ];

    pub fn is_mandatory(&self) -> bool {
        Self::MANDATORY.contains(self)
    }
}
